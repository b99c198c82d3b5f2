// AI-facing pieces shared by the generated and trending sources: the
// structured profile schema, the curator prompts, and error classification.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

use ai_client::Gemini;
use relicvault_common::{Artifact, RelicVaultError};

/// Fallback exhibit image when the image model has nothing for us.
pub(crate) const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/600/400";

/// Structured profile the generator must return. Field names match the
/// embedding host's artifact schema.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactProfile {
    pub name: String,
    pub original_subreddit: String,
    pub description: String,
    pub riddle: String,
    pub hint: String,
    pub lore: String,
    pub year: String,
    pub reddit_url: String,
}

impl ArtifactProfile {
    pub fn into_artifact(self, id: String, image_url: Option<String>) -> Artifact {
        Artifact {
            id,
            name: self.name,
            original_subreddit: self.original_subreddit,
            description: self.description,
            riddle: self.riddle,
            hint: self.hint,
            image_url,
            lore: self.lore,
            year: self.year,
            reddit_url: self.reddit_url,
        }
    }
}

pub(crate) const CURATOR_PREAMBLE: &str =
    "You are the curator of a museum of Reddit history. You write exhibit \
     profiles for legendary posts, comments, and sagas: reverent in tone, \
     playful underneath, and accurate about what actually happened.";

pub(crate) fn profile_prompt(subject: &str) -> String {
    format!(
        "Generate a museum-style profile for the legendary Reddit artifact: \
         \"{subject}\". Include a cryptic riddle that leads to identifying it \
         and deep lore about its origin on Reddit. Also provide a plausible \
         URL link to the original Reddit thread \
         (e.g., reddit.com/r/.../comments/...)."
    )
}

pub(crate) fn exhibit_image_prompt(subject: &str) -> String {
    format!(
        "A cinematic, museum-style exhibit display of a mysterious item \
         called \"{subject}\" in a dark, high-end gallery with professional \
         lighting and a brass plaque. The item looks iconic and legendary. \
         High resolution, 4k."
    )
}

/// Sort a generation failure into the error taxonomy: a schema problem if
/// the response reached us but would not parse, unavailability otherwise.
pub(crate) fn classify_generation_error(e: anyhow::Error) -> RelicVaultError {
    if e.downcast_ref::<serde_json::Error>().is_some() {
        RelicVaultError::SchemaMismatch(format!("{e:#}"))
    } else {
        RelicVaultError::SourceUnavailable(format!("{e:#}"))
    }
}

/// Request the exhibit image as a data URI. The image is presentation-only,
/// so a failure degrades to the placeholder instead of failing the day's
/// artifact.
pub(crate) async fn exhibit_image(ai: &Gemini, subject: &str) -> String {
    match ai.generate_image(exhibit_image_prompt(subject)).await {
        Ok(image) => image.to_data_uri(),
        Err(e) => {
            warn!(error = %e, subject, "Image generation failed, using placeholder");
            PLACEHOLDER_IMAGE_URL.to_string()
        }
    }
}
