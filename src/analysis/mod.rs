//! Heuristic text analysis over cleaned transcripts.
//!
//! A family of independent, stateless extractors: key phrases, numeric and
//! date facts, definitions, examples, step sequences, topic buckets, and an
//! extractive summary. There is no semantic understanding here, only pattern
//! matching driven by the static tables in [`tables`].

mod elements;
mod key_phrases;
mod summary;
pub mod tables;
mod topics;

pub use elements::{ElementExtractor, ImportantElements};
pub use key_phrases::KeyPhraseExtractor;
pub use summary::{summarize, NO_SUMMARY};
pub use topics::{organize_topics, organize_with, TopicBucket};

use crate::config::DetailLevel;

/// Everything the analyzer derives from a cleaned transcript.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub summary: String,
    pub key_phrases: Vec<String>,
    pub numbers: Vec<String>,
    pub dates: Vec<String>,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub steps: Vec<String>,
    pub topics: Vec<TopicBucket>,
}

impl AnalysisResult {
    /// Whether the transcript contains procedural content.
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Runs every extractor over a cleaned transcript.
pub struct TextAnalyzer {
    key_phrases: KeyPhraseExtractor,
    elements: ElementExtractor,
    key_phrase_count: usize,
}

impl TextAnalyzer {
    pub fn new(key_phrase_count: usize) -> Self {
        Self {
            key_phrases: KeyPhraseExtractor::new(),
            elements: ElementExtractor::new(),
            key_phrase_count,
        }
    }

    /// Analyze a cleaned transcript at the given detail level.
    pub fn analyze(&self, text: &str, detail: DetailLevel) -> AnalysisResult {
        let elements = self.elements.extract(text);

        AnalysisResult {
            summary: summarize(text, detail.summary_sentences()),
            key_phrases: self.key_phrases.extract(text, self.key_phrase_count),
            numbers: elements.numbers,
            dates: elements.dates,
            definitions: elements.definitions,
            examples: elements.examples,
            steps: elements.steps,
            topics: organize_topics(text),
        }
    }
}

/// Split text into trimmed sentences on sentence-ending punctuation.
///
/// Empty fragments (from runs of terminators) are dropped. Shared by the
/// extractors so they all agree on sentence boundaries.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("One here. Two there! Three anywhere? Four.");
        assert_eq!(sentences, vec!["One here", "Two there", "Three anywhere", "Four"]);
    }

    #[test]
    fn test_split_sentences_collapses_terminator_runs() {
        assert_eq!(split_sentences("Wait... what"), vec!["Wait", "what"]);
        assert!(split_sentences("...").is_empty());
    }

    #[test]
    fn test_analyze_empty_text() {
        let analyzer = TextAnalyzer::new(8);
        let result = analyzer.analyze("", DetailLevel::Medium);

        assert_eq!(result.summary, NO_SUMMARY);
        assert!(result.key_phrases.is_empty());
        assert!(result.topics.is_empty());
        assert!(!result.has_steps());
    }

    #[test]
    fn test_analyze_sample_transcript() {
        let analyzer = TextAnalyzer::new(8);
        let text = "Welcome back guys. First, install the tool. For example, you can use \
                    version 2.0. The process is defined as a pipeline. Finally, run the script.";
        let result = analyzer.analyze(text, DetailLevel::Brief);

        assert_ne!(result.summary, NO_SUMMARY);
        assert!(result.steps.iter().any(|s| s.contains("install the tool")));
        assert!(result.steps.iter().any(|s| s.contains("run the script")));
        assert!(result
            .definitions
            .iter()
            .any(|d| d.contains("is defined as")));
        assert!(result.examples.iter().any(|e| e.contains("For example")));
    }
}
