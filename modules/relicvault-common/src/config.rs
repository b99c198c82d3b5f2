use std::env;

/// Which artifact source backs the daily selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Curated static pool, rotated through the key-value store.
    Pool,
    /// AI-generated profile for a date-picked legendary artifact name.
    Generated,
    /// AI-generated profile for a date-picked trending subreddit post.
    Trending,
}

impl SourceMode {
    fn parse(raw: &str) -> Self {
        match raw {
            "pool" => SourceMode::Pool,
            "generated" => SourceMode::Generated,
            "trending" => SourceMode::Trending,
            other => panic!("SOURCE_MODE must be pool, generated, or trending (got {other})"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_mode: SourceMode,

    // AI provider (generated/trending modes only)
    pub gemini_api_key: String,

    // Trending source
    pub trending_subreddit: String,
    pub trending_limit: u32,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        let source_mode =
            SourceMode::parse(&env::var("SOURCE_MODE").unwrap_or_else(|_| "pool".to_string()));

        // The AI key is only required when a mode actually calls the generator.
        let gemini_api_key = match source_mode {
            SourceMode::Pool => env::var("GEMINI_API_KEY").unwrap_or_default(),
            _ => required_env("GEMINI_API_KEY"),
        };

        Self {
            source_mode,
            gemini_api_key,
            trending_subreddit: env::var("TRENDING_SUBREDDIT")
                .unwrap_or_else(|_| "MuseumOfReddit".to_string()),
            trending_limit: env::var("TRENDING_LIMIT")
                .unwrap_or_else(|_| "25".to_string())
                .parse()
                .expect("TRENDING_LIMIT must be a number"),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
