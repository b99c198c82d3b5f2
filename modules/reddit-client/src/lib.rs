pub mod error;
pub mod types;

pub use error::{RedditError, Result};
pub use types::{Listing, PostData, TrendingPost};

use reqwest::header::USER_AGENT;

use types::ListingData;

const BASE_URL: &str = "https://www.reddit.com";

/// The listing API rejects requests without an identifying User-Agent.
const DEFAULT_USER_AGENT: &str = "relicvault/0.1 (daily-artifact rotation)";

pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl RedditClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Fetch the top `limit` hot posts for a subreddit, in listing order,
    /// with pinned announcements filtered out.
    pub async fn hot_posts(&self, subreddit: &str, limit: u32) -> Result<Vec<TrendingPost>> {
        let url = format!(
            "{}/r/{}/hot.json?limit={}&raw_json=1",
            self.base_url, subreddit, limit
        );

        tracing::info!(subreddit, limit, "Fetching hot posts");

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RedditError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let listing: Listing = serde_json::from_str(&body)?;

        let posts = Self::normalize(listing.data, &self.base_url);
        tracing::info!(count = posts.len(), "Fetched hot posts");

        Ok(posts)
    }

    fn normalize(data: ListingData, base_url: &str) -> Vec<TrendingPost> {
        data.children
            .into_iter()
            .filter(|thing| !thing.data.stickied.unwrap_or(false))
            .filter_map(|thing| thing.data.into_trending(base_url))
            .collect()
    }
}

impl Default for RedditClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LISTING: &str = r#"{
        "kind": "Listing",
        "data": {
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "id": "aaa111",
                        "title": "Weekly announcements",
                        "subreddit": "MuseumOfReddit",
                        "score": 12,
                        "permalink": "/r/MuseumOfReddit/comments/aaa111/weekly/",
                        "created_utc": 1717200000.0,
                        "stickied": true
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "id": "7szmue",
                        "title": "The Poop Knife",
                        "subreddit": "MuseumOfReddit",
                        "score": 48211,
                        "permalink": "/r/MuseumOfReddit/comments/7szmue/the_poop_knife/",
                        "created_utc": 1517200000.0,
                        "stickied": false
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "id": "broken",
                        "subreddit": "MuseumOfReddit",
                        "score": 3
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn parses_listing_and_filters_pinned() {
        let listing: Listing = serde_json::from_str(SAMPLE_LISTING).unwrap();
        let posts = RedditClient::normalize(listing.data, BASE_URL);

        // The pinned announcement and the title-less entry are both dropped.
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.title, "The Poop Knife");
        assert_eq!(post.score, 48211);
        assert_eq!(
            post.permalink,
            "https://www.reddit.com/r/MuseumOfReddit/comments/7szmue/the_poop_knife/"
        );
        assert!(post.created.is_some());
    }

    #[test]
    fn malformed_listing_is_a_parse_error() {
        let result: std::result::Result<Listing, _> = serde_json::from_str("{\"kind\": 3}");
        assert!(result.is_err());
    }
}
