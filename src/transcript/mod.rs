//! Transcript acquisition and normalization.
//!
//! Turns a video identifier into cleaned transcript text: caption payloads
//! are fetched and decoded, with a chapter-outline fallback when no caption
//! track yields usable text, then the result is scrubbed of filler and noise.

mod acquire;
mod clean;
mod subtitle;

pub use acquire::TranscriptAcquirer;
pub use clean::TranscriptCleaner;
pub use subtitle::SubtitleDecoder;

/// Minimum raw transcript length for an acquisition strategy to count as a success.
pub const MIN_RAW_CHARS: usize = 50;

/// Minimum cleaned transcript length for note generation to proceed.
pub const MIN_CLEANED_CHARS: usize = 100;
