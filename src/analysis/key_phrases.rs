//! Frequency-based key phrase extraction.

use super::split_sentences;
use super::tables::STOP_WORDS;
use regex::Regex;
use std::collections::HashMap;

/// Number of whitespace tokens a key phrase is truncated to.
const PHRASE_TOKEN_LIMIT: usize = 15;

/// Extracts key phrases by ranking content words and quoting the first
/// sentence each one appears in.
pub struct KeyPhraseExtractor {
    word: Regex,
    stop_words: Vec<&'static str>,
}

impl KeyPhraseExtractor {
    pub fn new() -> Self {
        Self::with_stop_words(STOP_WORDS)
    }

    /// Build an extractor with an explicit stop-word table (tests use smaller ones).
    pub fn with_stop_words(stop_words: &[&'static str]) -> Self {
        Self {
            word: Regex::new(r"\b[a-zA-Z]{4,}\b").expect("Invalid word pattern"),
            stop_words: stop_words.to_vec(),
        }
    }

    /// Extract up to `count` key phrases from the text.
    pub fn extract(&self, text: &str, count: usize) -> Vec<String> {
        if text.is_empty() || count == 0 {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let candidates = self.rank_words(&lowered, count * 2);
        if candidates.is_empty() {
            return Vec::new();
        }

        let sentences = split_sentences(text);
        let mut phrases: Vec<String> = Vec::new();

        // Frequency-rank order; a word's first sentence wins, but a sentence
        // already quoted (or one too short) passes the word on to its next
        // containing sentence
        for word in candidates {
            if phrases.len() >= count {
                break;
            }

            for sentence in &sentences {
                if !sentence.to_lowercase().contains(&word) {
                    continue;
                }

                let phrase = sentence
                    .split_whitespace()
                    .take(PHRASE_TOKEN_LIMIT)
                    .collect::<Vec<_>>()
                    .join(" ");

                if phrase.len() > 20 && !phrases.contains(&phrase) {
                    phrases.push(phrase);
                    break;
                }
            }
        }

        phrases
    }

    /// Rank non-stop content words by frequency, ties broken by first
    /// occurrence, and return the top `limit`.
    fn rank_words(&self, lowered: &str, limit: usize) -> Vec<String> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

        for (position, m) in self.word.find_iter(lowered).enumerate() {
            let word = m.as_str();
            if self.stop_words.contains(&word) {
                continue;
            }
            let entry = counts.entry(word).or_insert((position, 0));
            entry.1 += 1;
        }

        let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then(a.1 .0.cmp(&b.1 .0)));

        ranked
            .into_iter()
            .take(limit)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

impl Default for KeyPhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}
