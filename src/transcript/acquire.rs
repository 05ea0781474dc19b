//! Transcript acquisition strategies.

use super::subtitle::SubtitleDecoder;
use super::{MIN_CLEANED_CHARS, MIN_RAW_CHARS};
use crate::analysis::tables::OUTLINE_MARKERS;
use crate::error::{NotatError, Result};
use crate::source::{CaptionTrack, VideoProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// English locale variants, in priority order. The `a.`/`v.` prefixes mark
/// auto-generated caption variants.
const ENGLISH_LOCALES: &[&str] = &["en", "en-US", "en-GB", "en-AU", "a.en", "v.en"];

/// Subtitle formats, in preference order.
const FORMAT_PRIORITY: &[&str] = &["vtt", "srt", "json3"];

/// Caption delivery endpoint timeout.
const CAPTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Acquires a raw transcript for a video, trying strategies in fixed order.
///
/// Per-attempt failures are swallowed so the next candidate can be tried;
/// only exhaustion of every strategy surfaces as an error.
pub struct TranscriptAcquirer {
    provider: Arc<dyn VideoProvider>,
    decoder: SubtitleDecoder,
    http: reqwest::Client,
}

impl TranscriptAcquirer {
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self {
            provider,
            decoder: SubtitleDecoder::new(),
            http: reqwest::Client::new(),
        }
    }

    /// Acquire a raw transcript, or fail with `NoTranscriptAvailable`.
    pub async fn acquire(&self, video_id: &str) -> Result<String> {
        if let Some(text) = self.try_captions(video_id).await {
            if text.trim().len() > MIN_RAW_CHARS {
                info!("Acquired transcript from captions ({} chars)", text.len());
                return Ok(text);
            }
        }

        if let Some(text) = self.try_outline(video_id).await {
            if text.trim().len() > MIN_RAW_CHARS {
                info!("Acquired pseudo-transcript from outline ({} chars)", text.len());
                return Ok(text);
            }
        }

        Err(NotatError::NoTranscriptAvailable)
    }

    /// Direct caption strategy: manual subtitles, then auto captions, over
    /// the English locale priority list; player-response URLs last.
    async fn try_captions(&self, video_id: &str) -> Option<String> {
        let listing = match self.provider.fetch_caption_tracks(video_id).await {
            Ok(listing) => listing,
            Err(e) => {
                debug!("Caption track lookup failed: {}", e);
                return None;
            }
        };

        for locale in ENGLISH_LOCALES {
            for tracks in [
                listing.subtitles.get(*locale),
                listing.automatic.get(*locale),
            ]
            .into_iter()
            .flatten()
            {
                if let Some(text) = self.fetch_tracks(tracks).await {
                    return Some(text);
                }
            }
        }

        // Last resort: caption URLs dug out of the player-response blob
        for url in &listing.player_urls {
            if let Some(text) = self.fetch_and_decode(url).await {
                return Some(text);
            }
        }

        None
    }

    /// Try every track of a locale in format-preference order.
    async fn fetch_tracks(&self, tracks: &[CaptionTrack]) -> Option<String> {
        for format in FORMAT_PRIORITY {
            for track in tracks.iter().filter(|t| t.format == *format) {
                if let Some(text) = self.fetch_and_decode(&track.url).await {
                    return Some(text);
                }
            }
        }
        None
    }

    /// Fetch a subtitle payload and decode it; None unless the decoded text
    /// clears the caption length floor.
    async fn fetch_and_decode(&self, url: &str) -> Option<String> {
        let response = match self.http.get(url).timeout(CAPTION_TIMEOUT).send().await {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                debug!("Caption fetch returned {}", r.status());
                return None;
            }
            Err(e) => {
                debug!("Caption fetch failed: {}", e);
                return None;
            }
        };

        let body = response.text().await.ok()?;
        let text = self.decoder.decode(&body);

        (text.len() > MIN_CLEANED_CHARS).then_some(text)
    }

    /// Alternative strategy: synthesize a pseudo-transcript from chapter
    /// titles and description lines that look like section headers.
    async fn try_outline(&self, video_id: &str) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        match self.provider.fetch_chapters(video_id).await {
            Ok(chapters) => {
                parts.extend(chapters.into_iter().map(|c| c.title));
            }
            Err(e) => debug!("Chapter lookup failed: {}", e),
        }

        match self.provider.fetch_metadata(video_id).await {
            Ok(Some(metadata)) => {
                for line in metadata.description.lines() {
                    let lowered = line.to_lowercase();
                    if OUTLINE_MARKERS.iter().any(|m| lowered.contains(m)) {
                        parts.push(line.to_string());
                    }
                }
            }
            Ok(None) => {}
            Err(e) => debug!("Metadata lookup for outline failed: {}", e),
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
