//! Pledge store
//!
//! Owns the persisted ledger. `load` and `append` are the only ways in;
//! every append rewrites the whole ledger under [`PLEDGES_KEY`].

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::consts::PLEDGES_KEY;
use crate::core::{Pledge, StoredPledge};
use crate::error::{AppError, StorageError};
use crate::storage::Storage;

pub(crate) struct PledgeStore<S> {
    storage: S,
}

impl<S: Storage> PledgeStore<S> {
    pub(crate) fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Full ledger in insertion order.
    ///
    /// A missing, unreadable or malformed slot reads as an empty ledger.
    pub(crate) fn load(&self) -> Vec<Pledge> {
        match self.read_ledger() {
            Ok(ledger) => {
                debug!(pledges = ledger.len(), "loaded ledger");
                ledger
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable pledge ledger");
                Vec::new()
            }
        }
    }

    /// Records without a name or action after trimming are skipped
    fn read_ledger(&self) -> Result<Vec<Pledge>, StorageError> {
        let Some(raw) = self.storage.get_item(PLEDGES_KEY)? else {
            return Ok(Vec::new());
        };
        let records: Vec<StoredPledge> = serde_json::from_str(&raw)?;
        let total = records.len();
        let ledger: Vec<Pledge> = records
            .into_iter()
            .filter_map(|r| Pledge::try_from(r).ok())
            .collect();
        if ledger.len() < total {
            warn!(
                skipped = total - ledger.len(),
                "skipping stored pledges without a name or action"
            );
        }
        Ok(ledger)
    }

    /// Validate, record and return a new pledge stamped with the current time
    pub(crate) fn append(
        &self,
        name: &str,
        action: &str,
        why: Option<&str>,
    ) -> Result<Pledge, AppError> {
        self.append_at(name, action, why, Utc::now())
    }

    pub(crate) fn append_at(
        &self,
        name: &str,
        action: &str,
        why: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<Pledge, AppError> {
        let pledge = Pledge::new(name, action, why, at)?;

        // Only malformed content may be replaced; a failed read must not
        // turn into an overwrite of the stored history.
        let mut ledger = match self.read_ledger() {
            Ok(ledger) => ledger,
            Err(StorageError::Json(e)) => {
                warn!(error = %e, "replacing malformed pledge ledger");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        ledger.push(pledge.clone());
        let serialized = serde_json::to_string(&ledger).map_err(StorageError::from)?;
        self.storage.set_item(PLEDGES_KEY, &serialized)?;

        debug!(action = pledge.action(), pledges = ledger.len(), "recorded pledge");
        Ok(pledge)
    }
}
