//! Notat - YouTube and Meeting Notes
//!
//! A tool that turns YouTube videos and meeting recordings into structured
//! study notes.
//!
//! The name "Notat" comes from the Norwegian word for "note."
//!
//! # Overview
//!
//! Notat allows you to:
//! - Generate structured notes from any YouTube video with English captions
//! - Produce meeting notes from uploaded audio recordings
//! - Browse previously generated notes from the CLI or an HTTP API
//!
//! The default engine extracts the video's own captions and analyzes them
//! locally with no API key; an optional generative engine (Gemini) handles
//! videos without captions and audio recordings.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `source` - Video metadata and caption providers (yt-dlp)
//! - `transcript` - Subtitle decoding, acquisition strategies, and cleaning
//! - `analysis` - Heuristic text analysis (key phrases, topics, summary)
//! - `notes` - Notes document assembly
//! - `store` - Saved-note persistence
//! - `generative` - Hosted generative backend
//! - `audio` - Audio upload handling
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use notat::config::{DetailLevel, NoteFormat, Settings};
//! use notat::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings);
//!
//!     let notes = orchestrator
//!         .generate_from_url(
//!             "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!             DetailLevel::Medium,
//!             NoteFormat::Bullet,
//!         )
//!         .await?;
//!     println!("{}", notes.document);
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generative;
pub mod notes;
pub mod orchestrator;
pub mod source;
pub mod store;
pub mod transcript;

pub use error::{NotatError, Result};
