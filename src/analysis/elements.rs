//! Extraction of numeric facts, dates, definitions, examples, and steps.

use super::tables::{
    DATE_PATTERNS, DEFINITION_PATTERNS, EXAMPLE_PATTERNS, NUMBER_PATTERN, STEP_PATTERNS,
};
use regex::Regex;
use std::collections::HashSet;

/// Minimum trimmed length for an extracted sentence to be kept.
const MIN_ELEMENT_CHARS: usize = 20;

/// Maximum numbers reported.
const MAX_NUMBERS: usize = 10;

/// Per-pattern caps.
const MAX_DATES: usize = 5;
const MAX_DEFINITIONS: usize = 5;
const MAX_EXAMPLES: usize = 5;
const MAX_STEPS: usize = 10;

/// Important elements pulled out of a cleaned transcript.
#[derive(Debug, Clone, Default)]
pub struct ImportantElements {
    pub numbers: Vec<String>,
    pub dates: Vec<String>,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub steps: Vec<String>,
}

/// Cue-pattern driven element extractor.
pub struct ElementExtractor {
    number: Regex,
    dates: Vec<Regex>,
    definitions: Vec<Regex>,
    examples: Vec<Regex>,
    steps: Vec<Regex>,
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid cue pattern"))
        .collect()
}

impl ElementExtractor {
    pub fn new() -> Self {
        Self {
            number: Regex::new(NUMBER_PATTERN).expect("Invalid number pattern"),
            dates: compile_all(DATE_PATTERNS),
            definitions: compile_all(DEFINITION_PATTERNS),
            examples: compile_all(EXAMPLE_PATTERNS),
            steps: compile_all(STEP_PATTERNS),
        }
    }

    /// Extract all element classes from the text.
    pub fn extract(&self, text: &str) -> ImportantElements {
        ImportantElements {
            numbers: self.numbers(text),
            dates: self.dates(text),
            definitions: collect_sentences(&self.definitions, text, MAX_DEFINITIONS),
            examples: collect_sentences(&self.examples, text, MAX_EXAMPLES),
            steps: collect_sentences(&self.steps, text, MAX_STEPS),
        }
    }

    /// Integer/decimal tokens, deduplicated, order preserved, capped at 10.
    fn numbers(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.number
            .find_iter(text)
            .take(MAX_NUMBERS)
            .map(|m| m.as_str().to_string())
            .filter(|n| seen.insert(n.clone()))
            .collect()
    }

    /// Date tokens, capped per pattern, concatenated in pattern order.
    fn dates(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for pattern in &self.dates {
            out.extend(
                pattern
                    .find_iter(text)
                    .take(MAX_DATES)
                    .map(|m| m.as_str().to_string()),
            );
        }
        out
    }
}

impl Default for ElementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect enclosing sentences matching each cue pattern, capped per pattern.
fn collect_sentences(patterns: &[Regex], text: &str, cap_per_pattern: usize) -> Vec<String> {
    let mut out = Vec::new();
    for pattern in patterns {
        out.extend(
            pattern
                .find_iter(text)
                .take(cap_per_pattern)
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| s.len() > MIN_ELEMENT_CHARS),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_deduplicated_and_ordered() {
        let extractor = ElementExtractor::new();
        let elements = extractor.extract("We saw 42 items, then 3.5 percent, then 42 again.");
        assert_eq!(elements.numbers, vec!["42", "3.5"]);
    }

    #[test]
    fn test_dates_both_shapes() {
        let extractor = ElementExtractor::new();
        let elements = extractor
            .extract("Released on 12/25/2023 and updated January 3, 2024 during the winter.");
        assert_eq!(elements.dates, vec!["12/25/2023", "January 3, 2024"]);
    }

    #[test]
    fn test_definitions_extracted() {
        let extractor = ElementExtractor::new();
        let elements = extractor.extract(
            "A compiler is defined as a program that translates source code. \
             Weather was nice yesterday outside.",
        );
        assert_eq!(elements.definitions.len(), 1);
        assert!(elements.definitions[0].contains("is defined as"));
    }

    #[test]
    fn test_examples_extracted() {
        let extractor = ElementExtractor::new();
        let elements =
            extractor.extract("For example, you can use version 2.0 of the tool every day.");
        // Both the phrase pattern and the bare-word pattern match this
        // sentence; overlapping matches are kept
        assert_eq!(elements.examples.len(), 2);
        assert!(elements.examples.iter().all(|e| e.contains("For example")));
    }

    #[test]
    fn test_short_matches_dropped() {
        let extractor = ElementExtractor::new();
        // The enclosing sentence trims to fewer than 21 characters
        let elements = extractor.extract("This means little.");
        assert!(elements.definitions.is_empty());
    }

    #[test]
    fn test_steps_extracted() {
        let extractor = ElementExtractor::new();
        let elements =
            extractor.extract("First, install the tool carefully. Finally, run the whole script.");
        assert_eq!(elements.steps.len(), 2);
        assert!(elements.steps[0].contains("install the tool"));
    }

    #[test]
    fn test_step_cap() {
        let extractor = ElementExtractor::new();
        let text = (1..=15)
            .map(|i| format!("Then we handle case number {} with great care. ", i))
            .collect::<String>();

        let elements = extractor.extract(&text);
        assert_eq!(elements.steps.len(), 10);
    }
}
