pub mod end_giveaway;
pub mod join_giveaway;
pub mod reroll_giveaway;
pub mod start_giveaway;

pub use start_giveaway::StartGiveaway;
