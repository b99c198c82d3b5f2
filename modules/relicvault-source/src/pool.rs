use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

use relicvault_common::{Artifact, RelicVaultError};

use crate::ArtifactSource;

/// Pure date rule: sum of the date key's numeric components modulo the
/// pool size. Every caller lands on the same index for the same date with
/// no shared state at all.
pub fn index_for_date(date: NaiveDate, len: usize) -> usize {
    debug_assert!(len > 0);
    (date.year().unsigned_abs() as usize + date.month() as usize + date.day() as usize) % len
}

/// A fixed, ordered collection of curated artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactPool {
    artifacts: Vec<Artifact>,
}

impl ArtifactPool {
    pub fn new(artifacts: Vec<Artifact>) -> Result<Self, RelicVaultError> {
        if artifacts.is_empty() {
            return Err(RelicVaultError::InvalidInput(
                "artifact pool must not be empty".into(),
            ));
        }
        Ok(Self { artifacts })
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Artifact> {
        self.artifacts.get(index)
    }

    /// The artifact the pure date rule picks for `date`.
    pub fn for_date(&self, date: NaiveDate) -> &Artifact {
        &self.artifacts[index_for_date(date, self.artifacts.len())]
    }

    /// The built-in museum pool.
    pub fn curated() -> Self {
        Self {
            artifacts: curated_artifacts(),
        }
    }
}

/// Offline source: the pure date rule over a fixed pool. Used where no
/// store exists; determinism comes from the date alone.
pub struct PoolSource {
    pool: ArtifactPool,
}

impl PoolSource {
    pub fn new(pool: ArtifactPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtifactSource for PoolSource {
    async fn daily_artifact(&self, date: NaiveDate) -> Result<Artifact, RelicVaultError> {
        Ok(self.pool.for_date(date).clone())
    }
}

fn artifact(
    id: &str,
    name: &str,
    description: &str,
    riddle: &str,
    hint: &str,
    lore: &str,
    year: &str,
    slug: &str,
) -> Artifact {
    Artifact {
        id: id.to_string(),
        name: name.to_string(),
        original_subreddit: "MuseumOfReddit".to_string(),
        description: description.to_string(),
        riddle: riddle.to_string(),
        hint: hint.to_string(),
        image_url: None,
        lore: lore.to_string(),
        year: year.to_string(),
        reddit_url: format!("https://www.reddit.com/r/MuseumOfReddit/comments/{id}/{slug}/"),
    }
}

fn curated_artifacts() -> Vec<Artifact> {
    vec![
        artifact(
            "7szmue",
            "Poop Knife",
            "A legendary artifact known as the fecal cleaver.",
            "I am a blade forged in the fires of internet legend, passed down \
             through a family like an heirloom. My edge cuts through the \
             mundane, leaving behind a trail of... well, you know.",
            "Think of a famous confession post involving a knife and a family \
             tradition nobody else had.",
            "The Poop Knife is one of the most infamous artifacts in Reddit \
             history, originating from a confession thread that went viral for \
             its sheer absurdity and the dawning horror of its author.",
            "2013",
            "the_poop_knife",
        ),
        artifact(
            "7c5293",
            "Pride and Accomplishment",
            "The most downvoted comment ever written, by a game publisher.",
            "I am a message from the corporate overlords, defending locked \
             heroes with talk of earned satisfaction. Millions pressed the \
             arrow that points at the floor.",
            "Remember the loot-box controversy and the comment that set a \
             downvote record.",
            "Posted in defense of locked characters in a AAA game, this \
             comment became the most downvoted in the site's history and a \
             permanent symbol of corporate tone-deafness.",
            "2017",
            "pride_and_accomplishment",
        ),
        artifact(
            "cbat4e",
            "Cbat",
            "The song a man played every time, for years, until his roommates \
             told the internet.",
            "I am a rhythm nobody asked for, looping behind a closed door. \
             Dolphin cries on a drum machine, and a relationship on the rocks.",
            "An experimental hip-hop track made famous by a roommate's \
             confession thread.",
            "Cbat escaped niche obscurity when a confession post revealed one \
             man's unusual devotion to it, spawning weeks of site-wide jokes \
             and interviews with the baffled artist.",
            "2022",
            "cbat",
        ),
        artifact(
            "1xkq2w",
            "The Safe",
            "A locked safe found in a basement, opened live for the internet.",
            "I waited in the dark below a new house, heavy with promise. \
             Thousands watched my door swing open. Ask me what was inside — \
             the answer is the joke.",
            "A saga of drilling, livestreams, and crushing anticlimax.",
            "When a new homeowner found a locked safe, the community adopted \
             the hunt as its own. The grand opening delivered the internet's \
             favorite punchline: nothing much at all.",
            "2014",
            "the_safe",
        ),
        artifact(
            "2ab9tc",
            "Swamps of Dagobah",
            "A surgical war story told by an anesthesiologist, unforgettable \
             against all wishes.",
            "I begin in an operating room on a quiet night and descend \
             somewhere no training covers. Yoda's home is my name; a mop \
             bucket is my legacy.",
            "A medical story so vivid it permanently entered the site's \
             vocabulary.",
            "Posted as a comment in a thread about medical horror stories, \
             the tale of the Swamps of Dagobah became required reading, the \
             canonical answer to 'what is the best comment ever written'.",
            "2014",
            "swamps_of_dagobah",
        ),
        artifact(
            "38fy9u",
            "Kevin",
            "The dumbest student a teacher ever met, immortalized in a \
             multi-part saga.",
            "I ate my homework in front of the teacher who assigned it. My \
             name became a unit of measurement for a certain kind of mind.",
            "A teacher's serialized stories about one unforgettable student.",
            "A teacher's recollections of a student of legendary density \
             turned into one of the site's best-loved sagas, and the name \
             Kevin into shorthand for a very special kind of decision-making.",
            "2015",
            "kevin",
        ),
    ]
}
