/// Storage slot holding the serialized pledge ledger
pub(crate) const PLEDGES_KEY: &str = "ecotech_pledges";

/// Shown in place of the leaderboard when nobody has pledged yet
pub(crate) const EMPTY_LEADERBOARD: &str = "No pledges yet — be the first!";

/// Fallback text for a quote button without its own quote
pub(crate) const DEFAULT_QUOTE: &str = "Take action—small steps matter.";

/// Directory name used under the platform config and data dirs
pub(crate) const APP_DIR: &str = "ecopledge";
