use std::sync::Arc;

use chrono::{TimeDelta, Utc};

use crate::engine::EngineInner;
use crate::errors::GiveawayError;
use crate::events::GiveawayEvent;
use crate::helpers::parse_duration;
use crate::instructions::end_giveaway;
use crate::scheduler;
use crate::states::{ChannelId, Giveaway, GiveawayId, GiveawayStatus, RoleId};

pub struct StartGiveaway {
    pub id: GiveawayId, // id of the announcement message, assigned by the host
    pub host_authorized: bool, // resolved upstream against the host whitelist
    pub prize: String,
    pub duration: String, // "45s", "10m", "2h", "1d"
    pub winner_count: u32,
    pub role_id: RoleId,
    pub channel_id: ChannelId,
}

pub(crate) fn start_giveaway(
    inner: &Arc<EngineInner>,
    request: StartGiveaway,
) -> Result<(), GiveawayError> {
    // ---------- Validations ----------
    if !request.host_authorized {
        return Err(GiveawayError::Unauthorized);
    }

    let span = parse_duration(&request.duration).ok_or_else(|| {
        GiveawayError::InvalidParameters(format!("unparseable duration {:?}", request.duration))
    })?;
    if span > inner.config.maximum_giveaway_period {
        return Err(GiveawayError::InvalidParameters(
            "duration exceeds the maximum giveaway period".to_string(),
        ));
    }
    if request.winner_count == 0 {
        return Err(GiveawayError::InvalidParameters(
            "winner count must be at least 1".to_string(),
        ));
    }
    if request.winner_count > inner.config.maximum_winners_count {
        return Err(GiveawayError::InvalidParameters(
            "winner count exceeds the maximum".to_string(),
        ));
    }

    let deadline = Utc::now()
        + TimeDelta::from_std(span).map_err(|_| {
            GiveawayError::InvalidParameters("duration out of range".to_string())
        })?;

    let giveaway = Giveaway {
        id: request.id,
        prize: request.prize.clone(),
        winner_count: request.winner_count,
        role_id: request.role_id,
        participants: Vec::new(),
        deadline,
        channel_id: request.channel_id,
        status: GiveawayStatus::Active,
        timer: None,
    };

    // ---------- Create + schedule ----------
    {
        let mut store = inner.lock_store();
        store.create(giveaway)?;

        // Scheduled only after the record exists so a failed create never
        // leaves a timer aimed at somebody else's id. The callback holds a
        // weak engine reference and the id only; a fire after the record is
        // gone is a benign no-op.
        let weak = Arc::downgrade(inner);
        let timer = scheduler::schedule_at(deadline, request.id, move |id| {
            end_giveaway::expire_giveaway(&weak, id);
        });
        if let Some(created) = store.get_mut(request.id) {
            created.timer = Some(timer);
        }
    }

    inner.events.emit(GiveawayEvent::GiveawayCreated {
        id: request.id,
        prize: request.prize,
        winner_count: request.winner_count,
        deadline,
        channel_id: request.channel_id,
    });
    Ok(())
}
