pub mod guess;
pub mod scoring;
pub mod session;
pub mod sighting;
pub mod world;

pub use session::{GameSession, GameStatus, GuessOutcome, RETRY_FEEDBACK};
pub use sighting::{ArtifactSighting, SightingEvent, SightingState, FOUND_RADIUS, REVEAL_DELAY};
pub use world::{MOVE_STEP, PLACEMENT_JITTER};
