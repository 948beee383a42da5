use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::constants::{MAXIMUM_GIVEAWAY_PERIOD, MAXIMUM_WINNERS_COUNT, REROLL_RETENTION};
use crate::errors::GiveawayError;
use crate::scheduler::TimerHandle;

/// Id of the announcement message that anchors a giveaway, supplied by the host.
pub type GiveawayId = u64;
pub type EntrantId = u64;
pub type RoleId = u64;
pub type ChannelId = u64;

/// Operational limits applied when a giveaway is started.
#[derive(Debug, Clone)]
pub struct GiveawayConfig {
    pub maximum_giveaway_period: Duration, // longest duration a giveaway can run
    pub maximum_winners_count: u32,        // winners requested per giveaway [1-max]
    pub reroll_retention: Duration,        // how long an ended pool stays rerollable
}

impl Default for GiveawayConfig {
    fn default() -> Self {
        GiveawayConfig {
            maximum_giveaway_period: MAXIMUM_GIVEAWAY_PERIOD,
            maximum_winners_count: MAXIMUM_WINNERS_COUNT,
            reroll_retention: REROLL_RETENTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveawayStatus {
    Active,
    Ended, // terminal; an ended giveaway never sits in the active store
}

#[derive(Debug)]
pub struct Giveaway {
    pub id: GiveawayId,
    pub prize: String,
    pub winner_count: u32,            // always >= 1
    pub role_id: RoleId,              // entrants must hold this role (resolved upstream)
    pub participants: Vec<EntrantId>, // no duplicate entrants, order irrelevant
    pub deadline: DateTime<Utc>,      // strictly in the future at creation
    pub channel_id: ChannelId,        // where the result line is announced
    pub status: GiveawayStatus,
    pub(crate) timer: Option<TimerHandle>, // the single pending expiry timer
}

impl Giveaway {
    /// Entry acceptance. Eligibility arrives pre-resolved; the engine never
    /// walks role membership itself. A duplicate join leaves the pool
    /// unchanged and is reported back as a notice, not a hard failure.
    pub fn try_join(&mut self, entrant: EntrantId, has_role: bool) -> Result<(), GiveawayError> {
        if !has_role {
            return Err(GiveawayError::Ineligible);
        }
        if self.participants.contains(&entrant) {
            return Err(GiveawayError::AlreadyJoined);
        }
        self.participants.push(entrant);
        Ok(())
    }

    pub(crate) fn into_ended(self, ended_at: DateTime<Utc>) -> EndedGiveaway {
        EndedGiveaway {
            id: self.id,
            prize: self.prize,
            winner_count: self.winner_count,
            participants: self.participants,
            channel_id: self.channel_id,
            ended_at,
        }
    }
}

/// Snapshot of a terminated giveaway, kept only so a late reroll can draw
/// from the same pool. Pruned after the configured retention window.
#[derive(Debug, Clone)]
pub struct EndedGiveaway {
    pub id: GiveawayId,
    pub prize: String,
    pub winner_count: u32,
    pub participants: Vec<EntrantId>,
    pub channel_id: ChannelId,
    pub ended_at: DateTime<Utc>,
}
