use chrono::{DateTime, Utc};
use serde::Deserialize;

// --- Normalized post type ---

/// A normalized hot post, the unit of trending-based daily selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingPost {
    pub title: String,
    pub subreddit: String,
    pub score: i64,
    /// Absolute URL to the post.
    pub permalink: String,
    pub created: Option<DateTime<Utc>>,
}

// --- Listing API wire types ---

/// Top-level listing envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// A `t3` wrapper around one post.
#[derive(Debug, Clone, Deserialize)]
pub struct Thing {
    pub data: PostData,
}

/// A single post from the listing. The listing mixes pinned announcements
/// into the top slots; `stickied` is used to filter those out.
#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    pub id: Option<String>,
    pub title: Option<String>,
    pub subreddit: Option<String>,
    pub score: Option<i64>,
    pub permalink: Option<String>,
    pub created_utc: Option<f64>,
    pub stickied: Option<bool>,
}

impl PostData {
    /// Convert to a normalized TrendingPost. Returns None when a required
    /// field is missing.
    pub fn into_trending(self, base_url: &str) -> Option<TrendingPost> {
        let title = self.title?;
        let subreddit = self.subreddit?;
        let permalink = self.permalink?;
        Some(TrendingPost {
            title,
            subreddit,
            score: self.score.unwrap_or(0),
            permalink: format!("{}{}", base_url, permalink),
            created: self
                .created_utc
                .and_then(|secs| DateTime::from_timestamp(secs as i64, 0)),
        })
    }
}
