//! Gemini API client.

use super::{GenerativeBackend, MediaReference, PromptConfig};
use crate::config::GeminiSettings;
use crate::error::{NotatError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

const API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini generative API.
///
/// Constructed with an explicit key; a missing credential fails here rather
/// than on first use.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    poll_interval: Duration,
    max_wait: Duration,
}

impl GeminiClient {
    pub fn new(settings: &GeminiSettings) -> Result<Self> {
        let api_key = settings.resolve_api_key().ok_or_else(|| {
            NotatError::MissingCredential(
                "GEMINI_API_KEY not set (config [gemini].api_key or environment)".to_string(),
            )
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model: settings.model.clone(),
            poll_interval: Duration::from_secs(settings.poll_interval_seconds.max(1)),
            max_wait: Duration::from_secs(settings.max_wait_seconds),
        })
    }

    /// Call generateContent with the given parts.
    async fn generate(&self, parts: Vec<serde_json::Value>) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        let body = json!({ "contents": [{ "parts": parts }] });

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(NotatError::Generative(format!(
                "generateContent returned {}: {}",
                status, detail
            )));
        }

        let data: serde_json::Value = response.json().await?;
        let text = data["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(NotatError::Generative(
                "Model returned an empty response".to_string(),
            ));
        }

        Ok(text.trim().to_string())
    }

    /// Upload an audio file and return its (name, uri).
    async fn upload_file(&self, path: &Path) -> Result<(String, String)> {
        let bytes = tokio::fs::read(path).await?;
        if bytes.is_empty() {
            return Err(NotatError::InvalidUpload("Audio file is empty".to_string()));
        }

        let url = format!("{}/upload/v1beta/files?key={}", API_BASE, self.api_key);
        info!("Uploading {} bytes of audio", bytes.len());

        let response = self
            .http
            .post(&url)
            .header("X-Goog-Upload-Protocol", "raw")
            .header("Content-Type", mime_type(path))
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotatError::Generative(format!(
                "File upload returned {}",
                response.status()
            )));
        }

        let data: serde_json::Value = response.json().await?;
        let name = data["file"]["name"]
            .as_str()
            .ok_or_else(|| NotatError::Generative("Upload response missing file name".to_string()))?
            .to_string();
        let uri = data["file"]["uri"]
            .as_str()
            .ok_or_else(|| NotatError::Generative("Upload response missing file uri".to_string()))?
            .to_string();

        Ok((name, uri))
    }

    /// Poll the uploaded file until it reaches ACTIVE, within the wait bound.
    async fn wait_until_active(&self, name: &str) -> Result<()> {
        let url = format!("{}/v1beta/{}?key={}", API_BASE, name, self.api_key);
        let mut waited = Duration::ZERO;

        loop {
            let state = self
                .http
                .get(&url)
                .send()
                .await?
                .json::<serde_json::Value>()
                .await
                .map(|data| data["state"].as_str().unwrap_or("UNKNOWN").to_string())
                .unwrap_or_else(|_| "UNKNOWN".to_string());

            debug!("Uploaded file state: {} (waited {:?})", state, waited);

            match state.as_str() {
                "ACTIVE" => return Ok(()),
                "FAILED" => {
                    return Err(NotatError::Generative(
                        "Uploaded audio file failed processing".to_string(),
                    ))
                }
                _ => {}
            }

            if waited >= self.max_wait {
                return Err(NotatError::Generative(format!(
                    "Uploaded audio file was not ready within {:?}. \
                     Please try again with a shorter recording.",
                    self.max_wait
                )));
            }

            tokio::time::sleep(self.poll_interval).await;
            waited += self.poll_interval;
        }
    }

    /// Best-effort deletion of an uploaded file.
    async fn delete_file(&self, name: &str) {
        let url = format!("{}/v1beta/{}?key={}", API_BASE, name, self.api_key);
        if let Err(e) = self.http.delete(&url).send().await {
            warn!("Failed to delete uploaded file {}: {}", name, e);
        }
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn transcribe_or_summarize(
        &self,
        media: &MediaReference,
        prompt: &PromptConfig,
    ) -> Result<String> {
        let prompt_text = prompt.render(media);

        match media {
            MediaReference::Url(_) => self.generate(vec![json!({ "text": prompt_text })]).await,
            MediaReference::AudioFile(path) => {
                let (name, uri) = self.upload_file(path).await?;

                let ready = self.wait_until_active(&name).await;
                if let Err(e) = ready {
                    self.delete_file(&name).await;
                    return Err(e);
                }

                let result = self
                    .generate(vec![
                        json!({ "text": prompt_text }),
                        json!({ "file_data": { "file_uri": uri, "mime_type": mime_type(path) } }),
                    ])
                    .await;

                self.delete_file(&name).await;
                result
            }
        }
    }
}

/// MIME type for an audio file, by extension.
fn mime_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("webm") => "audio/webm",
        Some("m4a") => "audio/mp4",
        _ => "audio/mpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_fails_at_construction() {
        let settings = GeminiSettings {
            api_key: Some(String::new()),
            ..Default::default()
        };

        // Empty key and (assumed) empty env both count as missing
        if std::env::var("GEMINI_API_KEY").is_err() {
            assert!(matches!(
                GeminiClient::new(&settings),
                Err(NotatError::MissingCredential(_))
            ));
        }
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type(Path::new("a.wav")), "audio/wav");
        assert_eq!(mime_type(Path::new("a.WEBM")), "audio/webm");
        assert_eq!(mime_type(Path::new("a.mp3")), "audio/mpeg");
        assert_eq!(mime_type(Path::new("noext")), "audio/mpeg");
    }
}
