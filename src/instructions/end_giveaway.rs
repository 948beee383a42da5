use std::sync::{Arc, Weak};

use chrono::Utc;

use crate::engine::EngineInner;
use crate::errors::GiveawayError;
use crate::events::GiveawayEvent;
use crate::helpers::result_announcement;
use crate::selector::draw_winners;
use crate::states::{EntrantId, GiveawayId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EndKind {
    Expired, // the deadline timer fired
    Manual,  // a host ended it early
}

/// The single terminal transition: remove from the store, draw, archive the
/// pool, announce. Removal under the store lock is first-wins, so whichever
/// of the racing enders gets here second finds nothing and reports
/// `NotFound`.
pub(crate) fn end_giveaway(
    inner: &Arc<EngineInner>,
    id: GiveawayId,
    kind: EndKind,
) -> Result<Vec<EntrantId>, GiveawayError> {
    let (channel_id, prize, winners) = {
        let mut store = inner.lock_store();
        let mut giveaway = store.remove(id).ok_or(GiveawayError::NotFound)?;

        // Cancellation is an optimization, not the guard; removal above is.
        if kind == EndKind::Manual {
            if let Some(timer) = giveaway.timer.take() {
                timer.cancel();
            }
        }

        let winners = draw_winners(
            &giveaway.participants,
            giveaway.winner_count,
            &mut rand::thread_rng(),
        );
        let channel_id = giveaway.channel_id;
        let prize = giveaway.prize.clone();
        store.archive(giveaway.into_ended(Utc::now()));
        (channel_id, prize, winners)
    };

    inner
        .announcer
        .announce(channel_id, result_announcement(&prize, &winners, false));
    inner.events.emit(GiveawayEvent::WinnersDrawn {
        id,
        winners: winners.clone(),
        reroll: false,
    });
    Ok(winners)
}

/// Timer callback. Firing after the record is gone (a manual end won the
/// race, or the engine itself is gone) is a designed outcome and is
/// swallowed silently.
pub(crate) fn expire_giveaway(inner: &Weak<EngineInner>, id: GiveawayId) {
    if let Some(inner) = inner.upgrade() {
        let _ = end_giveaway(&inner, id, EndKind::Expired);
    }
}

pub(crate) fn manual_end_giveaway(
    inner: &Arc<EngineInner>,
    id: GiveawayId,
    requester_authorized: bool,
) -> Result<Vec<EntrantId>, GiveawayError> {
    if !requester_authorized {
        return Err(GiveawayError::Unauthorized);
    }
    end_giveaway(inner, id, EndKind::Manual)
}
