//! Transcript cleaning.
//!
//! Scrubs raw transcript text of conversational filler, call-to-action
//! promotion, bracketed annotations, and spacing noise. Cleaning is
//! idempotent: re-cleaning already-cleaned text is a no-op.

use crate::analysis::tables::{CTA_PHRASES, FILLER_WORDS};
use regex::Regex;

/// Transcript cleaner with pre-compiled patterns.
pub struct TranscriptCleaner {
    whitespace: Regex,
    fillers: Regex,
    call_to_action: Regex,
    brackets: Regex,
    parens: Regex,
    music: Regex,
    numeric_line: Regex,
    repeated_terminators: Regex,
    space_before_punct: Regex,
    terminator_then_capital: Regex,
}

impl TranscriptCleaner {
    pub fn new() -> Self {
        Self::with_tables(FILLER_WORDS, CTA_PHRASES)
    }

    /// Build a cleaner from explicit filler tables (tests use smaller ones).
    pub fn with_tables(filler_words: &[&str], cta_phrases: &[&str]) -> Self {
        let fillers = format!(r"(?i)\b(?:{})\b", filler_words.join("|"));
        // Call-to-action phrases take everything up to the next sentence
        // terminator with them.
        let call_to_action = format!(r"(?i)\b(?:{})\b[^.!?]*[.!?]?", cta_phrases.join("|"));

        Self {
            whitespace: Regex::new(r"\s+").expect("Invalid whitespace pattern"),
            fillers: Regex::new(&fillers).expect("Invalid filler pattern"),
            call_to_action: Regex::new(&call_to_action).expect("Invalid call-to-action pattern"),
            brackets: Regex::new(r"\[[^\]]*\]").expect("Invalid bracket pattern"),
            parens: Regex::new(r"\([^)]*\)").expect("Invalid paren pattern"),
            music: Regex::new(r"♪[^♪]*♪").expect("Invalid music pattern"),
            numeric_line: Regex::new(r"(?m)^\s*[0-9]+\s*$").expect("Invalid numeric line pattern"),
            repeated_terminators: Regex::new(r"\.(?:\s*\.)+")
                .expect("Invalid repeated terminator pattern"),
            space_before_punct: Regex::new(r"\s+([.,!?;:])")
                .expect("Invalid punctuation spacing pattern"),
            terminator_then_capital: Regex::new(r"([.!?])([A-Z])")
                .expect("Invalid sentence spacing pattern"),
        }
    }

    /// Clean raw transcript text. Order of the passes matters.
    pub fn clean(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }

        let text = self.whitespace.replace_all(raw, " ").into_owned();
        let text = self.fillers.replace_all(&text, "");
        let text = self.call_to_action.replace_all(&text, "");
        let text = self.brackets.replace_all(&text, "");
        let text = self.parens.replace_all(&text, "");
        let text = self.music.replace_all(&text, "");
        let text = self.numeric_line.replace_all(&text, "");
        let text = collapse_adjacent_duplicates(&text);
        let text = self.repeated_terminators.replace_all(&text, ".");
        let text = self.space_before_punct.replace_all(&text, "$1");
        let text = self.terminator_then_capital.replace_all(&text, "$1 $2");

        self.whitespace.replace_all(&text, " ").trim().to_string()
    }
}

impl Default for TranscriptCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse immediately-adjacent duplicate words, case-insensitively.
///
/// A token scan rather than a backreference pattern (the regex crate has
/// none). The first occurrence wins unless the second carries punctuation,
/// so "the the." collapses to "the.".
fn collapse_adjacent_duplicates(text: &str) -> String {
    fn word_core(token: &str) -> &str {
        token.trim_matches(|c: char| !c.is_alphanumeric())
    }

    let mut out: Vec<&str> = Vec::new();
    for token in text.split_whitespace() {
        if let Some(prev) = out.last().copied() {
            let cur_core = word_core(token);
            if !cur_core.is_empty()
                && word_core(prev).eq_ignore_ascii_case(cur_core)
                && prev == word_core(prev)
            {
                if token != cur_core {
                    *out.last_mut().unwrap() = token;
                }
                continue;
            }
        }
        out.push(token);
    }

    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_whitespace_and_duplicates() {
        let cleaner = TranscriptCleaner::new();
        let cleaned = cleaner.clean("the   the   process works works fine.");
        assert_eq!(cleaned, "the process works fine.");
    }

    #[test]
    fn test_clean_removes_fillers() {
        let cleaner = TranscriptCleaner::new();
        let cleaned = cleaner.clean("Um, this is, you know, basically the answer.");
        assert!(!cleaned.to_lowercase().contains("um"));
        assert!(!cleaned.to_lowercase().contains("you know"));
        assert!(!cleaned.to_lowercase().contains("basically"));
        assert!(cleaned.contains("the answer"));
    }

    #[test]
    fn test_clean_removes_call_to_action_through_sentence_end() {
        let cleaner = TranscriptCleaner::new();
        let cleaned = cleaner.clean("Please subscribe and hit that button now. Real content here.");
        assert!(!cleaned.to_lowercase().contains("subscribe"));
        assert!(!cleaned.to_lowercase().contains("hit that button"));
        assert!(cleaned.contains("Real content here."));
    }

    #[test]
    fn test_clean_strips_annotations() {
        let cleaner = TranscriptCleaner::new();
        let cleaned = cleaner.clean("The topic [Applause] is ♪ intro jingle ♪ graph theory (pause) today.");
        assert!(!cleaned.contains("Applause"));
        assert!(!cleaned.contains("jingle"));
        assert!(!cleaned.contains("pause"));
        assert!(cleaned.contains("graph theory"));
    }

    #[test]
    fn test_clean_fixes_punctuation_spacing() {
        let cleaner = TranscriptCleaner::new();
        let cleaned = cleaner.clean("First point .Second point here !Third point ?");
        assert!(cleaned.contains("point. Second"));
        assert!(cleaned.contains("here! Third"));
        assert!(cleaned.ends_with('?'));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let cleaner = TranscriptCleaner::new();
        let inputs = [
            "the the quick  quick fox .Jumped over\n\nthe lazy   dog [who barked] twice .. done .",
            "Um well this this is a test , a test with with mixed punctuation !Spacing issues abound .",
            "Numbers stay. 42\nand so does the rest of this . .",
        ];

        for input in inputs {
            let once = cleaner.clean(input);
            let twice = cleaner.clean(&once);
            assert_eq!(once, twice, "cleaning was not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_clean_empty_input() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(cleaner.clean(""), "");
        assert_eq!(cleaner.clean("   \n "), "");
    }

    #[test]
    fn test_duplicate_collapse_keeps_punctuation() {
        assert_eq!(collapse_adjacent_duplicates("the the."), "the.");
        assert_eq!(collapse_adjacent_duplicates("The the end"), "The end");
        assert_eq!(collapse_adjacent_duplicates("go go go"), "go");
        assert_eq!(collapse_adjacent_duplicates("no dupes here"), "no dupes here");
    }
}
