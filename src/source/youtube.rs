//! YouTube video identifier extraction.

use regex::Regex;
use url::Url;

/// Extracts video identifiers from the URL shapes YouTube uses.
///
/// Patterns are tried in priority order; a query-string parse and a generic
/// 11-character token match serve as fallbacks for unusual link formats.
pub struct VideoIdExtractor {
    patterns: Vec<Regex>,
    generic: Regex,
}

impl VideoIdExtractor {
    pub fn new() -> Self {
        let shapes = [
            r"youtube\.com/watch\?v=([^&\s]+)",
            r"youtu\.be/([^?\s]+)",
            r"youtube\.com/embed/([^?\s]+)",
            r"youtube\.com/v/([^?\s]+)",
            r"youtube\.com/shorts/([^?\s]+)",
        ];

        let patterns = shapes
            .iter()
            .map(|p| Regex::new(p).expect("Invalid video ID pattern"))
            .collect();

        // Last resort: any 11-character token after a known marker
        let generic = Regex::new(r"(?:v=|be/|embed/|v/|shorts/)([\w-]{11})")
            .expect("Invalid generic video ID pattern");

        Self { patterns, generic }
    }

    /// Extract a video ID from a YouTube URL, or None if no shape matches.
    pub fn extract(&self, input: &str) -> Option<String> {
        let input = input.trim();

        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(input) {
                return Some(caps[1].to_string());
            }
        }

        // Parse the query string for a `v` parameter on any youtube.com link
        if let Ok(parsed) = Url::parse(input) {
            if parsed.host_str().is_some_and(|h| h.contains("youtube.com")) {
                if let Some((_, value)) = parsed.query_pairs().find(|(k, _)| k == "v") {
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }

        self.generic
            .captures(input)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for VideoIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_accepted_url_shapes() {
        let extractor = VideoIdExtractor::new();
        let id = Some("dQw4w9WgXcQ".to_string());

        // Every accepted shape resolves to the same identifier
        assert_eq!(
            extractor.extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            id
        );
        assert_eq!(extractor.extract("https://youtu.be/dQw4w9WgXcQ"), id);
        assert_eq!(
            extractor.extract("https://youtube.com/embed/dQw4w9WgXcQ"),
            id
        );
        assert_eq!(extractor.extract("https://youtube.com/v/dQw4w9WgXcQ"), id);
        assert_eq!(
            extractor.extract("https://youtube.com/shorts/dQw4w9WgXcQ"),
            id
        );
    }

    #[test]
    fn test_extract_strips_extra_query_params() {
        let extractor = VideoIdExtractor::new();
        assert_eq!(
            extractor.extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extractor.extract("https://youtu.be/dQw4w9WgXcQ?si=share"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_query_param_fallback() {
        let extractor = VideoIdExtractor::new();
        // `v` is not the first parameter, so the priority patterns miss it
        assert_eq!(
            extractor.extract("https://www.youtube.com/watch?feature=shared&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_invalid_inputs() {
        let extractor = VideoIdExtractor::new();
        assert_eq!(extractor.extract("https://example.com/watch?v=abc"), None);
        assert_eq!(extractor.extract("not a url at all"), None);
        assert_eq!(extractor.extract(""), None);
    }
}
