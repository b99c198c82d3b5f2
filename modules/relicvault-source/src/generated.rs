use async_trait::async_trait;
use chrono::NaiveDate;

use ai_client::Gemini;
use relicvault_common::{date_key, Artifact, RelicVaultError};

use crate::pool::index_for_date;
use crate::profile::{
    classify_generation_error, exhibit_image, profile_prompt, ArtifactProfile, CURATOR_PREAMBLE,
};
use crate::ArtifactSource;

/// Legendary artifacts the generator can exhibit. The pure date rule picks
/// one name per day; the profile itself is synthesized fresh.
const ARTIFACT_NAMES: &[&str] = &[
    "The Poop Knife",
    "Kevin (The dumbest student)",
    "Carbon Monoxide Post",
    "EA's Pride and Accomplishment comment",
    "The Safe (Locked for years)",
    "Swamps of Dagobah",
    "Cbat (The sex playlist song)",
    "Streetlamp LeMoose",
    "The Jolly Rancher Story",
    "Double Dick Dude",
];

/// Live source: date-picked artifact name, AI-synthesized profile and
/// exhibit image. The artifact id is the date key, so every caller of a
/// given day shares one id.
pub struct GeneratedSource {
    ai: Gemini,
    names: Vec<String>,
}

impl GeneratedSource {
    pub fn new(ai: Gemini) -> Self {
        Self {
            ai,
            names: ARTIFACT_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the built-in name list (must not be empty).
    pub fn with_names(mut self, names: Vec<String>) -> Result<Self, RelicVaultError> {
        if names.is_empty() {
            return Err(RelicVaultError::InvalidInput(
                "artifact name list must not be empty".into(),
            ));
        }
        self.names = names;
        Ok(self)
    }
}

#[async_trait]
impl ArtifactSource for GeneratedSource {
    async fn daily_artifact(&self, date: NaiveDate) -> Result<Artifact, RelicVaultError> {
        let name = &self.names[index_for_date(date, self.names.len())];

        let profile: ArtifactProfile = self
            .ai
            .generate(CURATOR_PREAMBLE, profile_prompt(name))
            .await
            .map_err(classify_generation_error)?;

        // Only requested once the profile is in hand: a failed generation
        // must not leave a half-built artifact behind.
        let image_url = exhibit_image(&self.ai, name).await;

        Ok(profile.into_artifact(date_key(date), Some(image_url)))
    }
}
