//! End-to-end note generation pipeline.
//!
//! Ties the stages together: URL parsing, metadata lookup, transcript
//! acquisition, cleaning, analysis, and document assembly. Each stage feeds
//! the next; the first fatal error aborts the request.

use crate::analysis::TextAnalyzer;
use crate::audio;
use crate::config::{DetailLevel, NoteFormat, NotesEngine, Settings};
use crate::error::{NotatError, Result};
use crate::generative::{GeminiClient, GenerativeBackend, MediaReference, PromptConfig};
use crate::notes::NotesFormatter;
use crate::source::{VideoIdExtractor, VideoMetadata, VideoProvider, YtDlpProvider};
use crate::store::JsonNoteStore;
use crate::transcript::{TranscriptAcquirer, TranscriptCleaner, MIN_CLEANED_CHARS};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a successful note generation run.
#[derive(Debug, Clone)]
pub struct GeneratedNotes {
    /// The assembled markdown document.
    pub document: String,
    /// Video title (placeholder when metadata lookup failed).
    pub title: String,
    /// The extracted 11-character video id.
    pub video_id: String,
}

/// Coordinates the full URL-to-notes pipeline.
pub struct Orchestrator {
    settings: Settings,
    provider: Arc<dyn VideoProvider>,
    extractor: VideoIdExtractor,
    acquirer: TranscriptAcquirer,
    cleaner: TranscriptCleaner,
    analyzer: TextAnalyzer,
    formatter: NotesFormatter,
    store: JsonNoteStore,
}

impl Orchestrator {
    pub fn new(settings: Settings) -> Self {
        Self::with_provider(settings, Arc::new(YtDlpProvider::new()))
    }

    /// Construct with a custom video provider. Used by tests.
    pub fn with_provider(settings: Settings, provider: Arc<dyn VideoProvider>) -> Self {
        let acquirer = TranscriptAcquirer::new(Arc::clone(&provider));
        let analyzer = TextAnalyzer::new(settings.notes.key_phrases);
        let store = JsonNoteStore::new(&settings.notes_path());

        Self {
            settings,
            provider,
            extractor: VideoIdExtractor::new(),
            acquirer,
            cleaner: TranscriptCleaner::new(),
            analyzer,
            formatter: NotesFormatter::new(),
            store,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &JsonNoteStore {
        &self.store
    }

    /// Generate notes for a YouTube URL with the configured engine.
    pub async fn generate_from_url(
        &self,
        url: &str,
        detail: DetailLevel,
        format: NoteFormat,
    ) -> Result<GeneratedNotes> {
        let video_id = self
            .extractor
            .extract(url)
            .ok_or_else(|| NotatError::InvalidUrl(url.to_string()))?;
        info!("Extracted video id {}", video_id);

        let metadata = self.lookup_metadata(&video_id).await;

        let document = match self.settings.notes.engine {
            NotesEngine::Heuristic => self.heuristic_notes(&video_id, &metadata, detail).await?,
            NotesEngine::Gemini => {
                let client = GeminiClient::new(&self.settings.gemini)?;
                let prompt = PromptConfig { detail, format };
                client
                    .transcribe_or_summarize(&MediaReference::Url(url.to_string()), &prompt)
                    .await?
            }
        };

        Ok(GeneratedNotes {
            document,
            title: metadata.title,
            video_id,
        })
    }

    /// Generate meeting notes from an uploaded audio file. Always uses the
    /// generative backend; there is no local transcription path.
    pub async fn generate_from_audio(
        &self,
        path: &Path,
        detail: DetailLevel,
        format: NoteFormat,
    ) -> Result<String> {
        let client = GeminiClient::new(&self.settings.gemini)?;
        let prompt = PromptConfig { detail, format };

        // Browser recordings arrive as webm; convert before upload.
        let (upload_path, converted) = if path.extension().is_some_and(|e| e == "webm") {
            (audio::convert_to_mp3(path).await?, true)
        } else {
            (path.to_path_buf(), false)
        };

        let result = client
            .transcribe_or_summarize(&MediaReference::AudioFile(upload_path.clone()), &prompt)
            .await;

        if converted {
            audio::cleanup_file(&upload_path);
        }

        result
    }

    /// The transcript extraction and heuristic analysis path.
    async fn heuristic_notes(
        &self,
        video_id: &str,
        metadata: &VideoMetadata,
        detail: DetailLevel,
    ) -> Result<String> {
        let raw = self.acquirer.acquire(video_id).await?;
        debug!("Raw transcript: {} chars", raw.len());

        let cleaned = self.cleaner.clean(&raw);
        if cleaned.len() < MIN_CLEANED_CHARS {
            return Err(NotatError::TranscriptTooShort(cleaned.len()));
        }
        debug!("Cleaned transcript: {} chars", cleaned.len());

        let analysis = self.analyzer.analyze(&cleaned, detail);
        Ok(self.formatter.format(metadata, &analysis, &cleaned))
    }

    /// Fetch video metadata, falling back to a placeholder so a failed
    /// lookup never blocks note generation.
    async fn lookup_metadata(&self, video_id: &str) -> VideoMetadata {
        match self.provider.fetch_metadata(video_id).await {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                debug!("No metadata for {}", video_id);
                VideoMetadata::placeholder(video_id)
            }
            Err(e) => {
                warn!("Metadata lookup failed for {}: {}", video_id, e);
                VideoMetadata::placeholder(video_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CaptionListing, Chapter};
    use async_trait::async_trait;

    struct ChapterProvider {
        chapters: Vec<&'static str>,
    }

    #[async_trait]
    impl VideoProvider for ChapterProvider {
        async fn fetch_metadata(&self, _video_id: &str) -> Result<Option<VideoMetadata>> {
            Ok(Some(VideoMetadata {
                title: "Build Week Retrospective".to_string(),
                duration_seconds: 905,
                description: String::new(),
            }))
        }

        async fn fetch_caption_tracks(&self, _video_id: &str) -> Result<CaptionListing> {
            Ok(CaptionListing::default())
        }

        async fn fetch_chapters(&self, _video_id: &str) -> Result<Vec<Chapter>> {
            Ok(self
                .chapters
                .iter()
                .map(|t| Chapter {
                    title: t.to_string(),
                })
                .collect())
        }
    }

    fn test_settings(dir: &tempfile::TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.storage.notes_path = dir
            .path()
            .join("notes.json")
            .to_string_lossy()
            .into_owned();
        settings
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = Orchestrator::with_provider(
            test_settings(&dir),
            Arc::new(ChapterProvider { chapters: vec![] }),
        );

        let err = orchestrator
            .generate_from_url("not a url at all", DetailLevel::Medium, NoteFormat::Bullet)
            .await
            .unwrap_err();
        assert!(matches!(err, NotatError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_short_cleaned_transcript_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        // 99 chars: clears the raw floor but sits just under the cleaned floor
        let orchestrator = Orchestrator::with_provider(
            test_settings(&dir),
            Arc::new(ChapterProvider {
                chapters: vec![
                    "Quarterly planning session covering roadmap, hiring mix, and budget targets before the next review.",
                ],
            }),
        );

        let err = orchestrator
            .generate_from_url(
                "https://www.youtube.com/watch?v=abc123def45",
                DetailLevel::Medium,
                NoteFormat::Bullet,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, NotatError::TranscriptTooShort(99)));
    }

    #[tokio::test]
    async fn test_chapter_outline_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = Orchestrator::with_provider(
            test_settings(&dir),
            Arc::new(ChapterProvider {
                chapters: vec![
                    "Introduction to the migration project and its goals.",
                    "Method used for moving services without downtime.",
                    "Results observed after the first deployment window.",
                    "Conclusion with lessons learned and next quarter plans.",
                ],
            }),
        );

        let notes = orchestrator
            .generate_from_url(
                "https://youtu.be/abc123def45",
                DetailLevel::Brief,
                NoteFormat::Bullet,
            )
            .await
            .unwrap();

        assert_eq!(notes.video_id, "abc123def45");
        assert_eq!(notes.title, "Build Week Retrospective");
        assert!(notes.document.contains("VIDEO NOTES: Build Week Retrospective"));
        assert!(notes.document.contains("EXECUTIVE SUMMARY"));
        assert!(notes.document.contains("15m 5s"));
    }
}
