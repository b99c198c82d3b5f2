// Collision state machine for one session's hidden artifact.
//
// Hidden → Detected → Found. `Detected` exists for the dissolve
// presentation: the find is only committed once the reveal deadline
// passes, and a teardown can cancel the pending transition instead of
// having a stale timer fire against disposed state.

use std::time::{Duration, Instant};

use relicvault_common::Position;

/// Distance below which the player has found the artifact.
pub const FOUND_RADIUS: f64 = 40.0;

/// Dissolve window between spotting the artifact and the committed find.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SightingState {
    Hidden,
    Detected,
    Found,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SightingEvent {
    Detected,
    Found,
}

pub struct ArtifactSighting {
    artifact: Position,
    state: SightingState,
    reveal_at: Option<Instant>,
}

impl ArtifactSighting {
    pub fn new(artifact: Position) -> Self {
        Self {
            artifact,
            state: SightingState::Hidden,
            reveal_at: None,
        }
    }

    pub fn state(&self) -> SightingState {
        self.state
    }

    pub fn artifact_position(&self) -> Position {
        self.artifact
    }

    /// Evaluate a position update. Only `Hidden` reacts: inside the found
    /// radius the sighting arms the reveal deadline and reports `Detected`.
    /// Once `Found`, re-entering the radius has no effect.
    pub fn observe(&mut self, player: Position, now: Instant) -> Option<SightingEvent> {
        if self.state != SightingState::Hidden {
            return None;
        }
        if player.distance(&self.artifact) < FOUND_RADIUS {
            self.state = SightingState::Detected;
            self.reveal_at = Some(now + REVEAL_DELAY);
            return Some(SightingEvent::Detected);
        }
        None
    }

    /// Commit a pending reveal once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<SightingEvent> {
        match (self.state, self.reveal_at) {
            (SightingState::Detected, Some(deadline)) if now >= deadline => {
                self.state = SightingState::Found;
                self.reveal_at = None;
                Some(SightingEvent::Found)
            }
            _ => None,
        }
    }

    /// Cancellation handle for session teardown: drops a pending reveal so
    /// nothing commits after the session is gone.
    pub fn cancel(&mut self) {
        if self.state == SightingState::Detected {
            self.state = SightingState::Hidden;
            self.reveal_at = None;
        }
    }
}
