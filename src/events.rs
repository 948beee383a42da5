use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

use crate::states::{ChannelId, EntrantId, GiveawayId};

/// One event per externally visible state transition.
#[derive(Debug, Clone)]
pub enum GiveawayEvent {
    GiveawayCreated {
        id: GiveawayId,
        prize: String,
        winner_count: u32,
        deadline: DateTime<Utc>,
        channel_id: ChannelId,
    },
    EntryAccepted {
        id: GiveawayId,
        entrant: EntrantId,
    },
    WinnersDrawn {
        id: GiveawayId,
        winners: Vec<EntrantId>,
        reroll: bool,
    },
}

/// In-memory, at-most-once fan-out. Events emitted while nobody is
/// subscribed are dropped; slow subscribers may lag.
#[derive(Debug)]
pub(crate) struct EventBus {
    tx: broadcast::Sender<GiveawayEvent>,
}

impl EventBus {
    pub(crate) fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        EventBus { tx }
    }

    pub(crate) fn emit(&self, event: GiveawayEvent) {
        let _ = self.tx.send(event);
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<GiveawayEvent> {
        self.tx.subscribe()
    }
}
