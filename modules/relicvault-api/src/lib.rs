pub mod rest;

use std::sync::Arc;

use relicvault_source::ArtifactSource;
use relicvault_store::Leaderboard;

pub struct AppState {
    pub source: Arc<dyn ArtifactSource>,
    pub leaderboard: Leaderboard,
}
