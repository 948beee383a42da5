use std::time::Duration;

pub const MAXIMUM_GIVEAWAY_PERIOD: Duration = Duration::from_secs(30 * 24 * 60 * 60); // longest duration a giveaway can run
pub const MAXIMUM_WINNERS_COUNT: u32 = 100; // winners can be set in a giveaway [1-100 max]
pub const REROLL_RETENTION: Duration = Duration::from_secs(24 * 60 * 60); // ended pools stay rerollable for this long
