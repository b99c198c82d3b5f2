use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use relicvault_common::{DailyRotationRecord, RelicVaultError};

use crate::kv::KeyValueStore;

/// KV key holding the serialized rotation record. Date and index live in
/// one value so the pair swaps atomically.
const ROTATION_KEY: &str = "daily_artifact_rotation";

/// A lost compare-and-swap means another request advanced the record for
/// the same date; the re-read settles on the winner's index, so a handful
/// of attempts is plenty.
const MAX_CAS_ATTEMPTS: usize = 4;

/// Server-side rotation: advances the pool index exactly once per calendar
/// day, idempotent within a day, wrapping at the pool end.
pub struct DailyRotation {
    store: Arc<dyn KeyValueStore>,
}

impl DailyRotation {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The pool index for `today`. The first request of a new date advances
    /// the persisted record by one (mod `pool_len`); every other request of
    /// that date observes the same index without mutating anything.
    pub async fn current_index(
        &self,
        today: NaiveDate,
        pool_len: usize,
    ) -> Result<usize, RelicVaultError> {
        if pool_len == 0 {
            return Err(RelicVaultError::NotFound("artifact pool is empty".into()));
        }

        for _ in 0..MAX_CAS_ATTEMPTS {
            let raw = self.store.get(ROTATION_KEY).await?;
            let record = raw
                .as_deref()
                .map(serde_json::from_str::<DailyRotationRecord>)
                .transpose()
                .map_err(|e| RelicVaultError::Store(format!("corrupt rotation record: {e}")))?;

            let candidate = match record {
                Some(r) if r.last_update_date == today => {
                    if r.current_index >= pool_len {
                        return Err(RelicVaultError::NotFound(format!(
                            "rotation index {} out of bounds for pool of {}",
                            r.current_index, pool_len
                        )));
                    }
                    return Ok(r.current_index);
                }
                Some(r) => DailyRotationRecord {
                    last_update_date: today,
                    current_index: (r.current_index + 1) % pool_len,
                },
                None => DailyRotationRecord {
                    last_update_date: today,
                    current_index: 0,
                },
            };

            let new_raw = serde_json::to_string(&candidate)
                .map_err(|e| RelicVaultError::Store(e.to_string()))?;

            if self
                .store
                .compare_and_swap(ROTATION_KEY, raw.as_deref(), &new_raw)
                .await?
            {
                info!(date = %today, index = candidate.current_index, "Rotated daily artifact");
                return Ok(candidate.current_index);
            }
            // Lost the race at the date boundary; loop re-reads the winner.
        }

        Err(RelicVaultError::Store(
            "rotation record kept changing under compare-and-swap".into(),
        ))
    }
}
