use std::sync::Arc;

use crate::engine::EngineInner;
use crate::errors::GiveawayError;
use crate::events::GiveawayEvent;
use crate::states::{EntrantId, GiveawayId};

/// Entry acceptance. A giveaway absent from the store is "not active":
/// joining it yields `NotFound` and never creates an ad-hoc record.
pub(crate) fn join_giveaway(
    inner: &Arc<EngineInner>,
    id: GiveawayId,
    entrant: EntrantId,
    has_role: bool,
) -> Result<(), GiveawayError> {
    {
        let mut store = inner.lock_store();
        let giveaway = store.get_mut(id).ok_or(GiveawayError::NotFound)?;
        giveaway.try_join(entrant, has_role)?;
    }

    inner
        .events
        .emit(GiveawayEvent::EntryAccepted { id, entrant });
    Ok(())
}
