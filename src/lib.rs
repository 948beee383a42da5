//! Lifecycle engine for timed, role-gated community giveaways.
//!
//! A host starts a giveaway with a prize, duration, winner count and
//! eligibility role; members join while it is active; at the deadline (or
//! on a manual end) winners are drawn uniformly without replacement and the
//! result line is handed to the host's [`Announcer`]. Rerolling draws again
//! from the same pool.
//!
//! All state is transient and in-process by design. The chat-platform
//! connection, command parsing, message rendering and role lookups stay
//! with the host: the engine is told "this actor is authorized" and "this
//! entrant holds the role" as booleans and never walks role membership
//! itself.
//!
//! The one ordering hazard is the race between a giveaway's deadline timer
//! and a manual end command. Both funnel into the same first-wins removal
//! under a single lock, so exactly one of them draws and announces; the
//! loser finds the record gone and treats that as "already ended".
//!
//! The engine must be driven from within a tokio runtime; expiry timers
//! are spawned tasks.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod scheduler;
pub mod selector;
pub mod states;
pub mod store;

pub use engine::{Announcer, GiveawayEngine};
pub use errors::GiveawayError;
pub use events::GiveawayEvent;
pub use instructions::StartGiveaway;
pub use states::{
    ChannelId, EntrantId, Giveaway, GiveawayConfig, GiveawayId, GiveawayStatus, RoleId,
};
