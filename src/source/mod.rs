//! Video source abstraction for Notat.
//!
//! Provides a trait-based interface to the video platform: metadata lookup,
//! caption track listings, and chapter outlines. The production implementation
//! shells out to yt-dlp; tests substitute mock providers.

mod youtube;
mod ytdlp;

pub use youtube::VideoIdExtractor;
pub use ytdlp::YtDlpProvider;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata about a video, fetched once per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Video title.
    pub title: String,
    /// Duration in seconds (0 when unknown).
    pub duration_seconds: u64,
    /// Video description (empty when unavailable).
    pub description: String,
}

impl VideoMetadata {
    /// Minimal stub used when every metadata lookup fails.
    pub fn placeholder(video_id: &str) -> Self {
        Self {
            title: format!("YouTube Video ({})", video_id),
            duration_seconds: 0,
            description: String::new(),
        }
    }
}

/// A single caption track in a given format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionTrack {
    /// Subtitle format ("vtt", "srt", "json3", ...).
    pub format: String,
    /// URL to fetch the subtitle payload from.
    pub url: String,
}

/// Caption tracks available for a video, keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct CaptionListing {
    /// Manually-authored subtitle tracks.
    pub subtitles: HashMap<String, Vec<CaptionTrack>>,
    /// Auto-generated caption tracks.
    pub automatic: HashMap<String, Vec<CaptionTrack>>,
    /// Caption URLs recovered from the embedded player-response blob
    /// (English tracks only). Used as a last resort.
    pub player_urls: Vec<String>,
}

impl CaptionListing {
    pub fn is_empty(&self) -> bool {
        self.subtitles.is_empty() && self.automatic.is_empty() && self.player_urls.is_empty()
    }
}

/// A chapter marker in a video's outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
}

/// Trait for video metadata/caption providers.
///
/// "Not found" is an explicit empty result rather than an error; only
/// transport-level failures surface as `Err`.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Fetch title, duration, and description for a video.
    async fn fetch_metadata(&self, video_id: &str) -> Result<Option<VideoMetadata>>;

    /// Fetch the caption tracks available for a video.
    async fn fetch_caption_tracks(&self, video_id: &str) -> Result<CaptionListing>;

    /// Fetch the chapter outline for a video (empty when none).
    async fn fetch_chapters(&self, video_id: &str) -> Result<Vec<Chapter>>;
}
