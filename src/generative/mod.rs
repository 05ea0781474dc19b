//! Generative note-taking backend.
//!
//! A thin abstraction over a hosted generative model: one interface that
//! accepts either a video URL or an uploaded audio file and returns notes
//! text, hiding provider-specific upload/poll/delete mechanics.

mod gemini;

pub use gemini::GeminiClient;

use crate::config::{DetailLevel, NoteFormat};
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// What the backend is asked to work from.
#[derive(Debug, Clone)]
pub enum MediaReference {
    /// A video URL the model can watch directly.
    Url(String),
    /// A local audio file to upload and transcribe.
    AudioFile(PathBuf),
}

/// Prompt customization options.
#[derive(Debug, Clone, Copy)]
pub struct PromptConfig {
    pub detail: DetailLevel,
    pub format: NoteFormat,
}

impl PromptConfig {
    /// Render the full prompt for a media reference.
    pub fn render(&self, media: &MediaReference) -> String {
        let detail = match self.detail {
            DetailLevel::Brief => "Provide a brief summary with only the most important points.",
            DetailLevel::Medium => {
                "Provide a comprehensive summary covering all main topics and key details."
            }
            DetailLevel::Detailed => {
                "Provide a very detailed summary with all topics, subtopics, examples, \
                 and important quotes or statements."
            }
        };

        let format = match self.format {
            NoteFormat::Bullet => {
                "Format the notes as bullet points with clear headings and sub-bullets."
            }
            NoteFormat::Paragraph => {
                "Format the notes as well-structured paragraphs with clear sections and headings."
            }
        };

        match media {
            MediaReference::Url(url) => format!(
                "Please watch this YouTube video and generate comprehensive notes: {}\n\n\
                 {}\n\n{}\n\n\
                 Include:\n\
                 - Main topics discussed\n\
                 - Key points and takeaways\n\
                 - Important details, examples, or quotes\n\
                 - Any actionable items or recommendations\n\n\
                 Generate the notes now:",
                url, detail, format
            ),
            MediaReference::AudioFile(_) => format!(
                "Please transcribe this audio recording and generate comprehensive meeting notes.\n\n\
                 {}\n\n{}\n\n\
                 Include:\n\
                 - Main topics discussed\n\
                 - Key points and decisions made\n\
                 - Action items and next steps\n\
                 - Important details or quotes\n\
                 - Participants' contributions (if identifiable)\n\n\
                 Generate the notes now:",
                detail, format
            ),
        }
    }
}

/// Trait for generative note-taking backends.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Turn a media reference into notes text.
    async fn transcribe_or_summarize(
        &self,
        media: &MediaReference,
        prompt: &PromptConfig,
    ) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_url_prompt() {
        let config = PromptConfig {
            detail: DetailLevel::Brief,
            format: NoteFormat::Bullet,
        };
        let prompt = config.render(&MediaReference::Url("https://youtu.be/abc".to_string()));

        assert!(prompt.contains("https://youtu.be/abc"));
        assert!(prompt.contains("brief summary"));
        assert!(prompt.contains("bullet points"));
    }

    #[test]
    fn test_render_audio_prompt() {
        let config = PromptConfig {
            detail: DetailLevel::Detailed,
            format: NoteFormat::Paragraph,
        };
        let prompt = config.render(&MediaReference::AudioFile(PathBuf::from("meet.mp3")));

        assert!(prompt.contains("transcribe this audio recording"));
        assert!(prompt.contains("very detailed summary"));
        assert!(prompt.contains("paragraphs"));
    }
}
