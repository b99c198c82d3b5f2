use rand::Rng;

use relicvault_common::{Position, WORLD_SIZE};

/// Movement step the host maps one arrow-key press to.
pub const MOVE_STEP: f64 = 20.0;

/// Artifact placement jitter around the world center, per axis.
pub const PLACEMENT_JITTER: f64 = 200.0;

/// Apply a movement delta, clamping to the world bounds. No wraparound:
/// pushing against an edge leaves the position on the edge.
pub fn apply_move(pos: Position, dx: f64, dy: f64) -> Position {
    Position::new(
        (pos.x + dx).clamp(0.0, WORLD_SIZE),
        (pos.y + dy).clamp(0.0, WORLD_SIZE),
    )
}

/// Pick the session's artifact position: world center plus bounded jitter.
/// Chosen once per session and immutable afterwards.
pub fn place_artifact<R: Rng + ?Sized>(rng: &mut R) -> Position {
    let center = Position::center();
    Position::new(
        center.x + rng.random_range(-PLACEMENT_JITTER..=PLACEMENT_JITTER),
        center.y + rng.random_range(-PLACEMENT_JITTER..=PLACEMENT_JITTER),
    )
}
