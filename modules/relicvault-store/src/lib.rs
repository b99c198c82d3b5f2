pub mod kv;
pub mod leaderboard;
pub mod progress;
pub mod rotation;

pub use kv::{KeyValueStore, MemoryStore};
pub use leaderboard::Leaderboard;
pub use progress::{JsonFileStore, MemoryProgress, ProgressStore};
pub use rotation::DailyRotation;
