use chrono::{DateTime, Utc};

use crate::consts::DEFAULT_QUOTE;

/// Seconds each tip stays on screen before the next one rotates in
pub(crate) const TIP_INTERVAL_SECS: i64 = 3;

pub(crate) const TIPS: [&str; 5] = [
    "Turn off chargers when phones are full—save energy and money.",
    "Plant native trees: less water, more local wildlife.",
    "Organize an e-waste drive—old phones = recoverable metals.",
    "Switch one classroom light to LED—immediate savings.",
    "Use a cloth for device cleaning—avoid liquids and damage.",
];

/// Tip at `index`, wrapping past the end of the list
pub(crate) fn tip_at(index: usize) -> &'static str {
    TIPS[index % TIPS.len()]
}

/// Rotation slot a visitor would be looking at at `now`
pub(crate) fn rotation_index(now: DateTime<Utc>) -> usize {
    let ticks = now.timestamp().div_euclid(TIP_INTERVAL_SECS);
    ticks.rem_euclid(TIPS.len() as i64) as usize
}

/// A quote button's text, or the stock encouragement when it has none
pub(crate) fn quote_or_default(quote: Option<&str>) -> &str {
    match quote.map(str::trim) {
        Some(q) if !q.is_empty() => q,
        _ => DEFAULT_QUOTE,
    }
}
