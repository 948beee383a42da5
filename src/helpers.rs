use std::time::Duration;

use crate::states::EntrantId;

/// Parse a duration in the host's shorthand: `45s`, `10m`, `2h`, `1d`.
/// A bare integer is taken as milliseconds. Zero, junk and overflowing
/// values parse to `None`.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    let (number, unit) = match text.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (&text[..text.len() - 1], Some(c.to_ascii_lowercase())),
        Some(_) => (text, None),
        None => return None,
    };

    let value: u64 = number.trim().parse().ok()?;
    if value == 0 {
        return None;
    }

    match unit {
        None => Some(Duration::from_millis(value)),
        Some('s') => Some(Duration::from_secs(value)),
        Some('m') => Some(Duration::from_secs(value.checked_mul(60)?)),
        Some('h') => Some(Duration::from_secs(value.checked_mul(60 * 60)?)),
        Some('d') => Some(Duration::from_secs(value.checked_mul(24 * 60 * 60)?)),
        Some(_) => None,
    }
}

pub fn winner_mentions(winners: &[EntrantId]) -> String {
    winners
        .iter()
        .map(|id| format!("<@{id}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compose the result line handed to the announcement sink.
pub fn result_announcement(prize: &str, winners: &[EntrantId], reroll: bool) -> String {
    let verb = if reroll { "Rerolled" } else { "Ended" };
    let result = if winners.is_empty() {
        "No valid participants 😢".to_string()
    } else {
        winner_mentions(winners)
    };
    format!("🎉 **Giveaway {verb}!**\n🎁 **Prize:** {prize}\n🏆 **Winner(s):** {result}")
}
