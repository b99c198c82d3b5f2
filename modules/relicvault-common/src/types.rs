use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// --- World geometry ---

/// Side length of the square exploration plane. Positions are clamped to
/// `[0, WORLD_SIZE]` on both axes.
pub const WORLD_SIZE: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// World center, where the player spawns each session.
    pub fn center() -> Self {
        Self::new(WORLD_SIZE / 2.0, WORLD_SIZE / 2.0)
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

// --- Artifact ---

/// The day's collectible record. Immutable once produced; the wire shape
/// (camelCase) is what the embedding host expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub original_subreddit: String,
    pub description: String,
    pub riddle: String,
    pub hint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub lore: String,
    pub year: String,
    pub reddit_url: String,
}

// --- Daily rotation ---

/// Server-side rotation state: which pool index is "today's" and when it
/// last advanced. Stored as one serialized value under a single key so the
/// date+index pair can be swapped atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRotationRecord {
    pub last_update_date: NaiveDate,
    pub current_index: usize,
}

// --- Player progress ---

/// Locally persisted progress. Mutated only on a correct solve; written
/// whole-record after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    pub score: u64,
    pub streak: u32,
    pub last_solved_date: Option<NaiveDate>,
    pub artifacts_collected: BTreeSet<String>,
}

// --- Leaderboard ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
}

// --- Date keys ---

/// Calendar-date key in `YYYY-MM-DD` form, the unit of daily rotation.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's calendar date in UTC. All callers must agree on the date for the
/// "same artifact per day" guarantee to hold, so local timezones are out.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn date_key_is_iso_day() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_key(d), "2025-03-07");
    }

    #[test]
    fn rotation_record_round_trips() {
        let record = DailyRotationRecord {
            last_update_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            current_index: 4,
        };
        let raw = serde_json::to_string(&record).unwrap();
        let back: DailyRotationRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn progress_wire_shape_is_camel_case() {
        let mut progress = GameProgress::default();
        progress.score = 100;
        progress.last_solved_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        progress.artifacts_collected.insert("7szmue".to_string());

        let value = serde_json::to_value(&progress).unwrap();
        assert_eq!(value["score"], 100);
        assert_eq!(value["lastSolvedDate"], "2025-06-01");
        assert_eq!(value["artifactsCollected"][0], "7szmue");
    }

    #[test]
    fn artifact_wire_shape_is_camel_case() {
        let artifact = Artifact {
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
        };
        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(value["originalSubreddit"], "MuseumOfReddit");
        assert_eq!(value["redditUrl"], artifact.reddit_url);
        // Absent image omitted entirely, not serialized as null.
        assert!(value.get("imageUrl").is_none());
    }
}
