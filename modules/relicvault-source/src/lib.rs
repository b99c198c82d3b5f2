pub mod generated;
pub mod pool;
pub mod profile;
pub mod rotated;
pub mod trending;

pub use generated::GeneratedSource;
pub use pool::{index_for_date, ArtifactPool, PoolSource};
pub use profile::ArtifactProfile;
pub use rotated::RotatedSource;
pub use trending::TrendingSource;

use async_trait::async_trait;
use chrono::NaiveDate;

use relicvault_common::{Artifact, RelicVaultError};

/// Where the day's artifact comes from.
///
/// Implementations must be deterministic per calendar day: every call with
/// the same `date` observes the same artifact, without caller coordination.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn daily_artifact(&self, date: NaiveDate) -> Result<Artifact, RelicVaultError>;
}
