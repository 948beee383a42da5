use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::states::GiveawayId;

/// Handle to the single pending expiry timer of a giveaway.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Best-effort cancellation; a no-op if the timer already fired.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

/// Schedule a one-shot callback at-or-after `deadline`, never before.
///
/// The spawned task carries only the giveaway id, never the record itself,
/// so a timer outliving its giveaway cannot resurrect it. The scheduler does
/// not retry or reschedule. Must be called from within a tokio runtime.
pub fn schedule_at<F>(deadline: DateTime<Utc>, id: GiveawayId, on_fire: F) -> TimerHandle
where
    F: FnOnce(GiveawayId) + Send + 'static,
{
    // A deadline already in the past still fires exactly once, immediately.
    let wait = (deadline - Utc::now()).to_std().unwrap_or(Duration::ZERO);
    let task = tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        on_fire(id);
    });
    TimerHandle { task }
}
