use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;

use crate::errors::GiveawayError;
use crate::events::{EventBus, GiveawayEvent};
use crate::instructions::{end_giveaway, join_giveaway, reroll_giveaway, start_giveaway};
use crate::states::{ChannelId, EntrantId, GiveawayConfig, GiveawayId};
use crate::store::GiveawayStore;

const EVENT_BUS_CAPACITY: usize = 64;

/// Fire-and-forget delivery of announcement lines. The engine does not
/// await or retry delivery; a failed send is the host's problem.
pub trait Announcer: Send + Sync {
    fn announce(&self, channel: ChannelId, message: String);
}

pub(crate) struct EngineInner {
    pub(crate) store: Mutex<GiveawayStore>,
    pub(crate) config: GiveawayConfig,
    pub(crate) announcer: Arc<dyn Announcer>,
    pub(crate) events: EventBus,
}

impl EngineInner {
    /// Every lifecycle operation serializes on this one lock; check-then-
    /// remove is atomic, which is what resolves the expiry/manual-end race.
    /// Never held across an await.
    pub(crate) fn lock_store(&self) -> MutexGuard<'_, GiveawayStore> {
        self.store.lock().expect("giveaway store mutex poisoned")
    }
}

/// The lifecycle controller. All giveaway state is transient and lost on
/// process restart; authorization and role eligibility arrive pre-resolved
/// as booleans. Must live inside a tokio runtime (expiry timers are
/// spawned tasks).
pub struct GiveawayEngine {
    inner: Arc<EngineInner>,
}

impl GiveawayEngine {
    pub fn new(announcer: Arc<dyn Announcer>) -> Self {
        Self::with_config(announcer, GiveawayConfig::default())
    }

    pub fn with_config(announcer: Arc<dyn Announcer>, config: GiveawayConfig) -> Self {
        let inner = EngineInner {
            store: Mutex::new(GiveawayStore::new(config.reroll_retention)),
            config,
            announcer,
            events: EventBus::new(EVENT_BUS_CAPACITY),
        };
        GiveawayEngine {
            inner: Arc::new(inner),
        }
    }

    /// Start a giveaway and schedule its expiry timer. Nothing is created
    /// when validation fails.
    pub fn start_giveaway(
        &self,
        request: start_giveaway::StartGiveaway,
    ) -> Result<(), GiveawayError> {
        start_giveaway::start_giveaway(&self.inner, request)
    }

    /// Accept an entry into an active giveaway.
    pub fn join_giveaway(
        &self,
        id: GiveawayId,
        entrant: EntrantId,
        has_role: bool,
    ) -> Result<(), GiveawayError> {
        join_giveaway::join_giveaway(&self.inner, id, entrant, has_role)
    }

    /// End a giveaway ahead of its deadline: draw, announce, remove.
    /// `NotFound` here means "already ended" and is benign to the caller.
    pub fn end_giveaway(
        &self,
        id: GiveawayId,
        requester_authorized: bool,
    ) -> Result<Vec<EntrantId>, GiveawayError> {
        end_giveaway::manual_end_giveaway(&self.inner, id, requester_authorized)
    }

    /// Draw winners again from the same pool. Works on an active giveaway
    /// (without ending it) or on one that ended within the retention window.
    pub fn reroll_giveaway(
        &self,
        id: GiveawayId,
        requester_authorized: bool,
    ) -> Result<Vec<EntrantId>, GiveawayError> {
        reroll_giveaway::reroll_giveaway(&self.inner, id, requester_authorized)
    }

    /// Observe lifecycle events. At-most-once; emitted events are dropped
    /// while nobody subscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<GiveawayEvent> {
        self.inner.events.subscribe()
    }

    pub fn is_active(&self, id: GiveawayId) -> bool {
        self.inner.lock_store().get(id).is_some()
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock_store().active_count()
    }
}
