use chrono::{DateTime, TimeDelta, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::GiveawayError;
use crate::states::{EndedGiveaway, Giveaway, GiveawayId};

/// Owns every giveaway record. An active giveaway lives in `active` until
/// its single terminal transition removes it; "removed" and "ended" are the
/// same thing. The ended archive only exists to serve late rerolls and is
/// pruned on access once the retention window has passed.
#[derive(Debug)]
pub struct GiveawayStore {
    active: HashMap<GiveawayId, Giveaway>,
    ended: HashMap<GiveawayId, EndedGiveaway>,
    retention: TimeDelta,
}

impl GiveawayStore {
    pub fn new(retention: Duration) -> Self {
        GiveawayStore {
            active: HashMap::new(),
            ended: HashMap::new(),
            retention: TimeDelta::from_std(retention).unwrap_or(TimeDelta::MAX),
        }
    }

    /// No two records may share an id.
    pub fn create(&mut self, giveaway: Giveaway) -> Result<(), GiveawayError> {
        match self.active.entry(giveaway.id) {
            Entry::Occupied(_) => Err(GiveawayError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(giveaway);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: GiveawayId) -> Option<&Giveaway> {
        self.active.get(&id)
    }

    pub fn get_mut(&mut self, id: GiveawayId) -> Option<&mut Giveaway> {
        self.active.get_mut(&id)
    }

    /// First caller of the racing enders gets the record; everyone after
    /// gets `None` and treats it as "already ended".
    pub fn remove(&mut self, id: GiveawayId) -> Option<Giveaway> {
        self.active.remove(&id)
    }

    /// Archive the pool of a terminated giveaway. Every terminal transition
    /// also drops pools already past retention, so the archive stays bounded
    /// on hosts that never reroll.
    pub fn archive(&mut self, ended: EndedGiveaway) {
        self.prune(ended.ended_at);
        self.ended.insert(ended.id, ended);
    }

    /// Look up an ended pool for reroll, dropping anything past retention.
    pub fn recall(&mut self, id: GiveawayId, now: DateTime<Utc>) -> Option<&EndedGiveaway> {
        self.prune(now);
        self.ended.get(&id)
    }

    fn prune(&mut self, now: DateTime<Utc>) {
        let retention = self.retention;
        self.ended
            .retain(|_, ended| now.signed_duration_since(ended.ended_at) <= retention);
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn ended_count(&self) -> usize {
        self.ended.len()
    }
}
