//! Leaderboard aggregation
//!
//! Tallies the ledger by exact action text and ranks by count.

use std::collections::HashMap;

use super::types::{LeaderboardEntry, Pledge};

/// Rank actions by how many pledges name them.
///
/// Actions with equal counts keep the order in which they first appear
/// in the ledger.
pub(crate) fn build(ledger: &[Pledge]) -> Vec<LeaderboardEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<LeaderboardEntry> = Vec::new();

    for pledge in ledger {
        match index.get(pledge.action()) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(pledge.action(), entries.len());
                entries.push(LeaderboardEntry {
                    action: pledge.action().to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, first-seen order survives among ties
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
