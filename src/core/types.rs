//! Pledge records and the leaderboard rows derived from them

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One user-submitted commitment.
///
/// Serialized as `{name, action, why, time}` so the ledger stays
/// readable by the page script that shares the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredPledge")]
pub(crate) struct Pledge {
    name: String,
    action: String,
    why: String,
    #[serde(rename = "time", serialize_with = "iso_millis::serialize")]
    timestamp: DateTime<Utc>,
}

/// A ledger record as read back from storage, before validation
#[derive(Debug, Deserialize)]
pub(crate) struct StoredPledge {
    name: String,
    action: String,
    #[serde(default)]
    why: String,
    #[serde(deserialize_with = "iso_millis::deserialize")]
    time: DateTime<Utc>,
}

impl TryFrom<StoredPledge> for Pledge {
    type Error = ValidationError;

    fn try_from(raw: StoredPledge) -> Result<Self, Self::Error> {
        Pledge::new(&raw.name, &raw.action, Some(&raw.why), raw.time)
    }
}

impl Pledge {
    /// Build a pledge from raw form input.
    ///
    /// Every field is trimmed. `name` and `action` must be non-empty
    /// afterwards; an omitted `why` becomes the empty string.
    pub(crate) fn new(
        name: &str,
        action: &str,
        why: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        let action = action.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if action.is_empty() {
            return Err(ValidationError::MissingAction);
        }
        Ok(Pledge {
            name: name.to_string(),
            action: action.to_string(),
            why: why.map(str::trim).unwrap_or_default().to_string(),
            timestamp: at.trunc_subsecs(3),
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn action(&self) -> &str {
        &self.action
    }

    pub(crate) fn why(&self) -> &str {
        &self.why
    }

    pub(crate) fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Everything before the first space of the name
    pub(crate) fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}

/// Aggregated pledge count for one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct LeaderboardEntry {
    pub(crate) action: String,
    pub(crate) count: u64,
}

impl LeaderboardEntry {
    /// Row text in the form the site shows: `Recycle — 2 pledges`
    pub(crate) fn label(&self) -> String {
        let plural = if self.count > 1 { "s" } else { "" };
        format!("{} — {} pledge{}", self.action, self.count, plural)
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(t: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}
