use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use relicvault_common::{Artifact, GameProgress, Position};
use relicvault_store::ProgressStore;

use crate::guess;
use crate::scoring::{record_solve, solved_today};
use crate::sighting::{ArtifactSighting, SightingEvent};
use crate::world;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Intro,
    Exploring,
    Solving,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    /// Static retry message; there is no hint escalation.
    Incorrect,
}

/// Feedback line shown on a wrong guess.
pub const RETRY_FEEDBACK: &str = "That's not it! Try reading the riddle again.";

/// One player's session against today's artifact: screen state, position,
/// the collision machine, and the persisted progress record.
pub struct GameSession {
    artifact: Artifact,
    status: GameStatus,
    player: Position,
    sighting: ArtifactSighting,
    progress: GameProgress,
    daily_found: bool,
    store: Arc<dyn ProgressStore>,
    today: NaiveDate,
}

impl GameSession {
    /// Start a session for today's artifact. Loads persisted progress and
    /// recomputes the daily-found flag against today's date, so yesterday's
    /// solve does not lock out today's hunt.
    pub fn new(
        artifact: Artifact,
        store: Arc<dyn ProgressStore>,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let progress = store.load()?.unwrap_or_default();
        let daily_found = solved_today(&progress, today);
        Ok(Self {
            sighting: ArtifactSighting::new(world::place_artifact(rng)),
            player: Position::center(),
            status: GameStatus::Intro,
            artifact,
            progress,
            daily_found,
            store,
            today,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn artifact_position(&self) -> Position {
        self.sighting.artifact_position()
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn daily_found(&self) -> bool {
        self.daily_found
    }

    /// Leave the intro screen. When today is already solved the hunt is
    /// closed and the session shows the archived entry instead.
    pub fn start_hunt(&mut self) {
        if self.status != GameStatus::Intro {
            return;
        }
        self.status = if self.daily_found {
            GameStatus::Success
        } else {
            GameStatus::Exploring
        };
    }

    /// Apply a movement vector while exploring and run the collision check.
    pub fn move_player(&mut self, dx: f64, dy: f64, now: Instant) -> Option<SightingEvent> {
        if self.status != GameStatus::Exploring {
            return None;
        }
        self.player = world::apply_move(self.player, dx, dy);
        self.sighting.observe(self.player, now)
    }

    /// Drive a pending reveal; a committed find moves the session to the
    /// riddle screen.
    pub fn poll(&mut self, now: Instant) -> Option<SightingEvent> {
        let event = self.sighting.poll(now);
        if event == Some(SightingEvent::Found) && self.status == GameStatus::Exploring {
            self.status = GameStatus::Solving;
        }
        event
    }

    /// Teardown hook: drops a pending reveal so the delayed transition
    /// never fires against a disposed session.
    pub fn cancel_pending_reveal(&mut self) {
        self.sighting.cancel();
    }

    /// Back out of the riddle screen to keep exploring.
    pub fn resume_exploring(&mut self) {
        if self.status == GameStatus::Solving {
            self.status = GameStatus::Exploring;
        }
    }

    /// Return to the main hall after viewing the archived entry.
    pub fn return_to_intro(&mut self) {
        if self.status == GameStatus::Success {
            self.status = GameStatus::Intro;
        }
    }

    /// Judge a free-text guess. A correct guess archives the artifact,
    /// applies the streak/score policy once per day, and persists the
    /// whole progress record.
    pub fn submit_guess(&mut self, guess_text: &str) -> Result<GuessOutcome> {
        if !guess::matches(guess_text, &self.artifact.name) {
            return Ok(GuessOutcome::Incorrect);
        }

        if record_solve(&mut self.progress, &self.artifact.id, self.today) {
            self.store.save(&self.progress)?;
            info!(
                artifact = %self.artifact.id,
                streak = self.progress.streak,
                score = self.progress.score,
                "Artifact archived"
            );
        }
        self.daily_found = true;
        self.status = GameStatus::Success;
        Ok(GuessOutcome::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sighting::REVEAL_DELAY;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use relicvault_store::MemoryProgress;

    fn artifact() -> Artifact {
        Artifact {
            id: "7szmue".into(),
            name: "Poop Knife".into(),
            original_subreddit: "MuseumOfReddit".into(),
            description: "A legendary artifact.".into(),
            riddle: "A blade of legend.".into(),
            hint: "A knife.".into(),
            image_url: None,
            lore: "Infamous.".into(),
            year: "2013".into(),
            reddit_url: "https://www.reddit.com/r/MuseumOfReddit/comments/7szmue/".into(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session_with(store: Arc<MemoryProgress>) -> GameSession {
        let mut rng = StdRng::seed_from_u64(42);
        GameSession::new(artifact(), store, day(2025, 6, 10), &mut rng).unwrap()
    }

    /// Walk the session through find-and-reveal so it reaches Solving.
    fn reach_solving(session: &mut GameSession, now: Instant) {
        session.start_hunt();
        let target = session.artifact_position();
        let player = session.player();
        let event = session.move_player(target.x - player.x, target.y - player.y, now);
        assert_eq!(event, Some(SightingEvent::Detected));
        assert_eq!(session.poll(now + REVEAL_DELAY), Some(SightingEvent::Found));
        assert_eq!(session.status(), GameStatus::Solving);
    }

    #[test]
    fn fresh_session_starts_at_intro_with_zeroed_progress() {
        let session = session_with(Arc::new(MemoryProgress::new()));
        assert_eq!(session.status(), GameStatus::Intro);
        assert_eq!(session.player(), Position::center());
        assert_eq!(session.progress().score, 0);
        assert!(!session.daily_found());
    }

    #[test]
    fn movement_is_ignored_outside_exploring() {
        let mut session = session_with(Arc::new(MemoryProgress::new()));
        assert_eq!(session.move_player(20.0, 0.0, Instant::now()), None);
        assert_eq!(session.player(), Position::center());
    }

    #[test]
    fn correct_guess_archives_and_persists() {
        let store = Arc::new(MemoryProgress::new());
        let mut session = session_with(store.clone());
        reach_solving(&mut session, Instant::now());

        // Wrong guess first: static feedback, still solving.
        assert_eq!(
            session.submit_guess("banana").unwrap(),
            GuessOutcome::Incorrect
        );
        assert_eq!(session.status(), GameStatus::Solving);

        assert_eq!(
            session.submit_guess("the poop knife").unwrap(),
            GuessOutcome::Correct
        );
        assert_eq!(session.status(), GameStatus::Success);
        assert!(session.daily_found());
        assert_eq!(session.progress().score, 100);
        assert_eq!(session.progress().streak, 1);

        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.score, 100);
        assert!(persisted.artifacts_collected.contains("7szmue"));
    }

    #[test]
    fn solving_can_return_to_exploring() {
        let mut session = session_with(Arc::new(MemoryProgress::new()));
        reach_solving(&mut session, Instant::now());

        session.resume_exploring();
        assert_eq!(session.status(), GameStatus::Exploring);
        // The find already committed; wandering back in does not re-trigger.
        let target = session.artifact_position();
        let player = session.player();
        assert_eq!(
            session.move_player(target.x - player.x, target.y - player.y, Instant::now()),
            None
        );
    }

    #[test]
    fn already_solved_day_skips_straight_to_success() {
        let store = Arc::new(MemoryProgress::new());
        {
            let mut session = session_with(store.clone());
            reach_solving(&mut session, Instant::now());
            session.submit_guess("poop knife").unwrap();
        }

        // Same-day reload: the hunt is closed, and a re-solve earns nothing.
        let mut session = session_with(store.clone());
        assert!(session.daily_found());
        session.start_hunt();
        assert_eq!(session.status(), GameStatus::Success);
        assert_eq!(session.submit_guess("poop knife").unwrap(), GuessOutcome::Correct);
        assert_eq!(session.progress().score, 100);
        assert_eq!(store.load().unwrap().unwrap().score, 100);
    }

    #[test]
    fn next_day_reload_reopens_the_hunt() {
        let store = Arc::new(MemoryProgress::new());
        {
            let mut session = session_with(store.clone());
            reach_solving(&mut session, Instant::now());
            session.submit_guess("poop knife").unwrap();
        }

        let mut rng = StdRng::seed_from_u64(1);
        let session =
            GameSession::new(artifact(), store, day(2025, 6, 11), &mut rng).unwrap();
        assert!(!session.daily_found());
        assert_eq!(session.progress().streak, 1);
    }

    #[test]
    fn teardown_cancels_a_pending_reveal() {
        let mut session = session_with(Arc::new(MemoryProgress::new()));
        session.start_hunt();
        let now = Instant::now();
        let target = session.artifact_position();
        let player = session.player();
        session.move_player(target.x - player.x, target.y - player.y, now);

        session.cancel_pending_reveal();
        assert_eq!(session.poll(now + REVEAL_DELAY), None);
        assert_eq!(session.status(), GameStatus::Exploring);
    }
}
