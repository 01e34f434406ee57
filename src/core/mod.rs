//! Core module - pledge records and leaderboard derivation

mod leaderboard;
mod types;

pub(crate) use leaderboard::build as build_leaderboard;
pub(crate) use types::{LeaderboardEntry, Pledge, StoredPledge};
