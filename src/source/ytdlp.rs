//! yt-dlp-backed video provider.

use super::{CaptionListing, CaptionTrack, Chapter, VideoMetadata, VideoProvider};
use crate::error::{NotatError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Metadata endpoint timeout (oEmbed title lookup).
const OEMBED_TIMEOUT: Duration = Duration::from_secs(5);

/// Video provider backed by yt-dlp, with an oEmbed fallback for titles.
pub struct YtDlpProvider {
    http: reqwest::Client,
}

impl YtDlpProvider {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Run `yt-dlp --dump-json` for a video and parse the output.
    ///
    /// Returns `Ok(None)` when the video is unavailable; `Err` only for
    /// tool-level failures.
    async fn dump_json(&self, video_id: &str) -> Result<Option<serde_json::Value>> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);

        let output = tokio::process::Command::new("yt-dlp")
            .args([
                "--dump-json",
                "--no-download",
                "--no-warnings",
                "--ignore-errors",
                &url,
            ])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotatError::ToolNotFound("yt-dlp".to_string())
                } else {
                    NotatError::ToolFailed(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp reported video {} unavailable: {}", video_id, stderr);
            return Ok(None);
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let json = serde_json::from_str(&json_str)
            .map_err(|e| NotatError::ToolFailed(format!("Failed to parse yt-dlp output: {}", e)))?;

        Ok(Some(json))
    }

    /// Secondary title lookup via the oEmbed endpoint.
    async fn fetch_oembed_title(&self, video_id: &str) -> Option<String> {
        let url = format!(
            "https://www.youtube.com/oembed?url=https://youtube.com/watch?v={}&format=json",
            video_id
        );

        let response = self
            .http
            .get(&url)
            .timeout(OEMBED_TIMEOUT)
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let data: serde_json::Value = response.json().await.ok()?;
        data["title"].as_str().map(|s| s.to_string())
    }

    /// Parse a `{locale: [{ext, url}]}` caption map from a yt-dlp dump.
    fn parse_track_map(value: &serde_json::Value) -> HashMap<String, Vec<CaptionTrack>> {
        let mut map = HashMap::new();

        let Some(obj) = value.as_object() else {
            return map;
        };

        for (locale, tracks) in obj {
            let Some(entries) = tracks.as_array() else {
                continue;
            };

            let parsed: Vec<CaptionTrack> = entries
                .iter()
                .filter_map(|t| {
                    let format = t["ext"].as_str()?;
                    let url = t["url"].as_str()?;
                    Some(CaptionTrack {
                        format: format.to_string(),
                        url: url.to_string(),
                    })
                })
                .collect();

            if !parsed.is_empty() {
                map.insert(locale.clone(), parsed);
            }
        }

        map
    }

    /// Pull English caption URLs out of the embedded player-response blob.
    fn parse_player_urls(info: &serde_json::Value) -> Vec<String> {
        // yt-dlp may carry the blob as a JSON string or an already-parsed object
        let parsed;
        let player = match &info["player_response"] {
            serde_json::Value::String(raw) => {
                match serde_json::from_str::<serde_json::Value>(raw) {
                    Ok(value) => {
                        parsed = value;
                        &parsed
                    }
                    Err(_) => return Vec::new(),
                }
            }
            value @ serde_json::Value::Object(_) => value,
            _ => return Vec::new(),
        };

        let tracks = &player["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"];
        let Some(tracks) = tracks.as_array() else {
            return Vec::new();
        };

        tracks
            .iter()
            .filter(|t| {
                t["languageCode"]
                    .as_str()
                    .is_some_and(|code| code.starts_with("en"))
            })
            .filter_map(|t| t["baseUrl"].as_str().map(|s| s.to_string()))
            .collect()
    }
}

impl Default for YtDlpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoProvider for YtDlpProvider {
    async fn fetch_metadata(&self, video_id: &str) -> Result<Option<VideoMetadata>> {
        match self.dump_json(video_id).await {
            Ok(Some(info)) => {
                let title = info["title"].as_str().unwrap_or("Unknown Title").to_string();
                let duration_seconds = info["duration"].as_f64().unwrap_or(0.0).max(0.0) as u64;
                let description = info["description"].as_str().unwrap_or("").to_string();

                Ok(Some(VideoMetadata {
                    title,
                    duration_seconds,
                    description,
                }))
            }
            Ok(None) | Err(_) => {
                warn!("Primary metadata lookup failed for {}, trying oEmbed", video_id);
                Ok(self.fetch_oembed_title(video_id).await.map(|title| {
                    VideoMetadata {
                        title,
                        duration_seconds: 0,
                        description: String::new(),
                    }
                }))
            }
        }
    }

    async fn fetch_caption_tracks(&self, video_id: &str) -> Result<CaptionListing> {
        let Some(info) = self.dump_json(video_id).await? else {
            return Ok(CaptionListing::default());
        };

        Ok(CaptionListing {
            subtitles: Self::parse_track_map(&info["subtitles"]),
            automatic: Self::parse_track_map(&info["automatic_captions"]),
            player_urls: Self::parse_player_urls(&info),
        })
    }

    async fn fetch_chapters(&self, video_id: &str) -> Result<Vec<Chapter>> {
        let Some(info) = self.dump_json(video_id).await? else {
            return Ok(Vec::new());
        };

        let chapters = info["chapters"]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|c| c["title"].as_str())
                    .map(|title| Chapter {
                        title: title.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(chapters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_track_map() {
        let value = serde_json::json!({
            "en": [
                {"ext": "vtt", "url": "https://captions.example/en.vtt"},
                {"ext": "srt", "url": "https://captions.example/en.srt"}
            ],
            "de": [{"ext": "vtt", "url": "https://captions.example/de.vtt"}],
            "broken": [{"ext": "vtt"}]
        });

        let map = YtDlpProvider::parse_track_map(&value);
        assert_eq!(map["en"].len(), 2);
        assert_eq!(map["en"][0].format, "vtt");
        assert_eq!(map["de"].len(), 1);
        assert!(!map.contains_key("broken"));
    }

    #[test]
    fn test_parse_player_urls_from_string_blob() {
        let blob = serde_json::json!({
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {"languageCode": "en", "baseUrl": "https://captions.example/en"},
                        {"languageCode": "en-US", "baseUrl": "https://captions.example/en-US"},
                        {"languageCode": "fr", "baseUrl": "https://captions.example/fr"}
                    ]
                }
            }
        });
        let info = serde_json::json!({"player_response": blob.to_string()});

        let urls = YtDlpProvider::parse_player_urls(&info);
        assert_eq!(urls.len(), 2);
        assert!(urls.iter().all(|u| u.contains("/en")));
    }

    #[test]
    fn test_parse_player_urls_missing() {
        let info = serde_json::json!({"title": "no captions here"});
        assert!(YtDlpProvider::parse_player_urls(&info).is_empty());
    }
}
