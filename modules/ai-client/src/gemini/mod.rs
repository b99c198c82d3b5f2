mod client;
pub(crate) mod types;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::schema::ResponseSchema;
use client::GeminiClient;
use types::*;

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
    image_model: String,
    base_url: Option<String>,
}

/// A generated image: base64 payload plus its MIME type.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: String,
}

impl GeneratedImage {
    /// Render as a `data:` URI suitable for an `<img src>` attribute.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the base64 payload to raw bytes.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| anyhow!("Invalid base64 image payload: {}", e))
    }
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            image_model: "gemini-2.5-flash-image".to_string(),
            base_url: None,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow!("GEMINI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    // =========================================================================
    // Convenience methods
    // =========================================================================

    /// Generate JSON constrained by `T`'s schema and deserialize it.
    pub async fn generate<T: ResponseSchema>(
        &self,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::gemini_schema();

        debug!(type_name = T::type_name(), "Gemini structured generation");

        let request = GenerateRequest::new()
            .system(system_prompt)
            .user(user_prompt)
            .config(GenerationConfig {
                // Structured extraction must be deterministic
                temperature: Some(0.0),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
                response_modalities: None,
            });

        let response = self.client().generate(&self.model, &request).await?;

        let text = response
            .text()
            .ok_or_else(|| anyhow!("No structured output in Gemini response"))?;

        // Keep the serde error in the chain so callers can tell a schema
        // mismatch apart from an unreachable service.
        serde_json::from_str(&text).context("Failed to deserialize structured response")
    }

    /// Plain freeform text generation.
    pub async fn generate_text(&self, prompt: impl Into<String>) -> Result<String> {
        let request = GenerateRequest::new().user(prompt);

        let response = self.client().generate(&self.model, &request).await?;

        response
            .text()
            .ok_or_else(|| anyhow!("No text in Gemini response"))
    }

    /// Generate an image with the configured image model.
    pub async fn generate_image(&self, prompt: impl Into<String>) -> Result<GeneratedImage> {
        let request = GenerateRequest::new().user(prompt).config(GenerationConfig {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            ..GenerationConfig::default()
        });

        let response = self.client().generate(&self.image_model, &request).await?;

        let inline = response
            .inline_data()
            .ok_or_else(|| anyhow!("No image data in Gemini response"))?;

        Ok(GeneratedImage {
            mime_type: inline.mime_type.clone(),
            data: inline.data.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_new() {
        let ai = Gemini::new("test-key", "gemini-3-flash-preview");
        assert_eq!(ai.model, "gemini-3-flash-preview");
        assert_eq!(ai.api_key, "test-key");
    }

    #[test]
    fn test_gemini_with_base_url() {
        let ai = Gemini::new("test-key", "gemini-3-flash-preview")
            .with_base_url("https://custom.api.com");
        assert_eq!(ai.base_url, Some("https://custom.api.com".to_string()));
    }

    #[test]
    fn data_uri_includes_mime_type() {
        let image = GeneratedImage {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        assert_eq!(image.to_data_uri(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.bytes().unwrap(), b"hello");
    }
}
