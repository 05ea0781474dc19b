//! Subtitle payload decoding.
//!
//! Converts raw caption payloads (YouTube's timed-text JSON, WebVTT, SRT)
//! into plain text. Decoding never fails; unparseable input yields an empty
//! string and the acquirer moves on to the next candidate.

use regex::Regex;

/// Subtitle decoder with a pre-compiled markup pattern.
pub struct SubtitleDecoder {
    tag: Regex,
}

impl SubtitleDecoder {
    pub fn new() -> Self {
        Self {
            tag: Regex::new(r"<[^>]+>").expect("Invalid markup tag pattern"),
        }
    }

    /// Decode a subtitle blob into plain text.
    pub fn decode(&self, blob: &str) -> String {
        let trimmed = blob.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        // YouTube's json3 format: a list of timed events carrying text segments
        if trimmed.starts_with('{') {
            if let Some(text) = decode_timed_json(trimmed) {
                return text;
            }
        }

        self.decode_timed_text(blob)
    }

    /// Decode line-oriented timed text (WebVTT / SRT).
    fn decode_timed_text(&self, blob: &str) -> String {
        let mut lines = Vec::new();
        for line in blob.lines() {
            let stripped = line.trim();

            // Timing ranges, cue indices, blanks, and header/style/note markers
            if stripped.is_empty()
                || line.contains("-->")
                || stripped.chars().all(|c| c.is_ascii_digit())
                || line.starts_with("WEBVTT")
                || line.starts_with("STYLE")
                || line.starts_with("NOTE")
            {
                continue;
            }

            let cleaned = self.tag.replace_all(line, "");
            let cleaned = cleaned.trim();
            if !cleaned.is_empty() {
                lines.push(cleaned.to_string());
            }
        }

        lines.join(" ")
    }
}

impl Default for SubtitleDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the JSON timed-text shape: `{"events": [{"segs": [{"utf8": ...}]}]}`.
fn decode_timed_json(blob: &str) -> Option<String> {
    let data: serde_json::Value = serde_json::from_str(blob).ok()?;
    let events = data["events"].as_array()?;

    let mut parts = Vec::new();
    for event in events {
        let Some(segs) = event["segs"].as_array() else {
            continue;
        };
        for seg in segs {
            if let Some(text) = seg["utf8"].as_str() {
                parts.push(text.to_string());
            }
        }
    }

    Some(parts.join(" "))
}
