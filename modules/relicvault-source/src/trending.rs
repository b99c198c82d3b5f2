use async_trait::async_trait;
use chrono::NaiveDate;

use ai_client::Gemini;
use reddit_client::{RedditClient, RedditError, TrendingPost};
use relicvault_common::{date_key, Artifact, RelicVaultError};

use crate::pool::index_for_date;
use crate::profile::{
    classify_generation_error, exhibit_image, profile_prompt, ArtifactProfile, CURATOR_PREAMBLE,
};
use crate::ArtifactSource;

/// Live source backed by a subreddit's hot listing: today's post is picked
/// deterministically from the listing and its profile synthesized by the
/// generator.
pub struct TrendingSource {
    reddit: RedditClient,
    ai: Gemini,
    subreddit: String,
    limit: u32,
}

impl TrendingSource {
    pub fn new(reddit: RedditClient, ai: Gemini, subreddit: impl Into<String>, limit: u32) -> Self {
        Self {
            reddit,
            ai,
            subreddit: subreddit.into(),
            limit,
        }
    }
}

/// Pick the day's post. The hot listing reorders between requests, so the
/// candidates are sorted by permalink before indexing — same date, same
/// post, for every caller.
fn select_post(mut posts: Vec<TrendingPost>, date: NaiveDate) -> Option<TrendingPost> {
    if posts.is_empty() {
        return None;
    }
    posts.sort_by(|a, b| a.permalink.cmp(&b.permalink));
    let index = index_for_date(date, posts.len());
    Some(posts.swap_remove(index))
}

#[async_trait]
impl ArtifactSource for TrendingSource {
    async fn daily_artifact(&self, date: NaiveDate) -> Result<Artifact, RelicVaultError> {
        let posts = self
            .reddit
            .hot_posts(&self.subreddit, self.limit)
            .await
            .map_err(|e| match e {
                RedditError::Parse(msg) => RelicVaultError::SchemaMismatch(msg),
                other => RelicVaultError::SourceUnavailable(other.to_string()),
            })?;

        let post = select_post(posts, date).ok_or_else(|| {
            RelicVaultError::SourceUnavailable(format!(
                "hot listing for r/{} returned no posts",
                self.subreddit
            ))
        })?;

        let subject = format!("{} (from r/{})", post.title, post.subreddit);
        let profile: ArtifactProfile = self
            .ai
            .generate(CURATOR_PREAMBLE, profile_prompt(&subject))
            .await
            .map_err(classify_generation_error)?;

        let image_url = exhibit_image(&self.ai, &post.title).await;

        let mut artifact = profile.into_artifact(date_key(date), Some(image_url));
        // The listing is authoritative for provenance; the model only
        // writes the exhibit copy.
        artifact.reddit_url = post.permalink;
        artifact.original_subreddit = post.subreddit;
        Ok(artifact)
    }
}
