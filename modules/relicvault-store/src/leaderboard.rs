use std::sync::Arc;

use relicvault_common::{LeaderboardEntry, RelicVaultError};

use crate::kv::KeyValueStore;

/// Sorted-set key for the community high scores.
const LEADERBOARD_KEY: &str = "high_scores";

pub struct Leaderboard {
    store: Arc<dyn KeyValueStore>,
}

impl Leaderboard {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Upsert a user's score. The latest submission replaces any prior
    /// score for the username — last write wins, not a maximum.
    pub async fn submit(&self, username: &str, score: i64) -> Result<(), RelicVaultError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(RelicVaultError::InvalidInput("username is required".into()));
        }
        if score < 0 {
            return Err(RelicVaultError::InvalidInput(
                "score must be non-negative".into(),
            ));
        }

        self.store
            .sorted_set_add(LEADERBOARD_KEY, username, score)
            .await?;
        Ok(())
    }

    /// The `n` highest scores, descending. Ties keep storage order.
    pub async fn top(&self, n: usize) -> Result<Vec<LeaderboardEntry>, RelicVaultError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let entries = self
            .store
            .sorted_set_range(LEADERBOARD_KEY, 0, n - 1, true)
            .await?;
        Ok(entries
            .into_iter()
            .map(|(username, score)| LeaderboardEntry { username, score })
            .collect())
    }
}
