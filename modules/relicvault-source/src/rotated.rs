use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use relicvault_common::{Artifact, RelicVaultError};
use relicvault_store::{DailyRotation, KeyValueStore};

use crate::pool::ArtifactPool;
use crate::ArtifactSource;

/// Server-backed source: the persisted rotation counter over a fixed pool.
/// This is the canonical selection rule for deployments with a store — the
/// pure date rule is never consulted here.
pub struct RotatedSource {
    pool: ArtifactPool,
    rotation: DailyRotation,
}

impl RotatedSource {
    pub fn new(pool: ArtifactPool, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            pool,
            rotation: DailyRotation::new(store),
        }
    }
}

#[async_trait]
impl ArtifactSource for RotatedSource {
    async fn daily_artifact(&self, date: NaiveDate) -> Result<Artifact, RelicVaultError> {
        let index = self.rotation.current_index(date, self.pool.len()).await?;
        self.pool
            .get(index)
            .cloned()
            .ok_or_else(|| RelicVaultError::NotFound(format!("no artifact at index {index}")))
    }
}
