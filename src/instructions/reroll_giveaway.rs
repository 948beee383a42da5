use std::sync::Arc;

use chrono::Utc;

use crate::engine::EngineInner;
use crate::errors::GiveawayError;
use crate::events::GiveawayEvent;
use crate::helpers::result_announcement;
use crate::selector::draw_winners;
use crate::states::{EntrantId, GiveawayId};

/// Draw winners again from the same pool. A still-active giveaway keeps
/// running: rerolling neither removes the record nor touches its timer. An
/// ended giveaway can be rerolled from its archived pool until the
/// retention window closes.
pub(crate) fn reroll_giveaway(
    inner: &Arc<EngineInner>,
    id: GiveawayId,
    requester_authorized: bool,
) -> Result<Vec<EntrantId>, GiveawayError> {
    if !requester_authorized {
        return Err(GiveawayError::Unauthorized);
    }

    let (channel_id, prize, winners) = {
        let mut store = inner.lock_store();
        let (pool, winner_count, channel_id, prize) = if let Some(giveaway) = store.get(id) {
            (
                giveaway.participants.clone(),
                giveaway.winner_count,
                giveaway.channel_id,
                giveaway.prize.clone(),
            )
        } else if let Some(ended) = store.recall(id, Utc::now()) {
            (
                ended.participants.clone(),
                ended.winner_count,
                ended.channel_id,
                ended.prize.clone(),
            )
        } else {
            return Err(GiveawayError::NotFound);
        };

        let winners = draw_winners(&pool, winner_count, &mut rand::thread_rng());
        (channel_id, prize, winners)
    };

    inner
        .announcer
        .announce(channel_id, result_announcement(&prize, &winners, true));
    inner.events.emit(GiveawayEvent::WinnersDrawn {
        id,
        winners: winners.clone(),
        reroll: true,
    });
    Ok(winners)
}
