//! Extractive summary generation.

use super::split_sentences;

/// Minimum trimmed sentence length to qualify for the summary.
const MIN_SUMMARY_SENTENCE_CHARS: usize = 30;

/// Fallback text when nothing qualifies.
pub const NO_SUMMARY: &str = "No summary available.";

/// Build an extractive summary of at most `max_sentences` sentences.
///
/// Short transcripts are summarized whole. Longer ones are sampled at fixed
/// positions: the opening sentence, the one-third and two-thirds marks (when
/// more than three sentences qualify), and the closing sentence.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences: Vec<String> = split_sentences(text)
        .into_iter()
        .filter(|s| s.len() > MIN_SUMMARY_SENTENCE_CHARS)
        .collect();

    if sentences.is_empty() {
        return NO_SUMMARY.to_string();
    }

    if sentences.len() <= max_sentences {
        return format!("{}.", sentences.join(". "));
    }

    let mut indices = vec![0];
    if sentences.len() > 3 {
        indices.push(sentences.len() / 3);
        indices.push(2 * sentences.len() / 3);
    }
    indices.push(sentences.len() - 1);

    let selected: Vec<&str> = indices
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect();

    format!("{}.", selected.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(n: usize) -> String {
        format!("Sentence number {} carries enough weight to qualify", n)
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize("", 4), NO_SUMMARY);
        assert_eq!(summarize("Too short. Tiny. Small.", 4), NO_SUMMARY);
    }

    #[test]
    fn test_summarize_short_text_joined_whole() {
        let text = format!("{}. {}.", sentence(1), sentence(2));
        let summary = summarize(&text, 4);
        assert!(summary.contains("number 1"));
        assert!(summary.contains("number 2"));
        assert!(summary.ends_with('.'));
    }

    #[test]
    fn test_summarize_fixed_index_selection() {
        // Five qualifying sentences at medium detail (target 4): thirds of 5
        // are indices 1 and 3, plus the first and last => [0, 1, 3, 4]
        let text = (0..5).map(|n| format!("{}. ", sentence(n))).collect::<String>();
        let summary = summarize(&text, 4);

        assert!(summary.contains("number 0"));
        assert!(summary.contains("number 1"));
        assert!(!summary.contains("number 2"));
        assert!(summary.contains("number 3"));
        assert!(summary.contains("number 4"));
    }

    #[test]
    fn test_summarize_skips_midpoints_for_three_sentences() {
        // With target below count but only 3 sentences, thirds are skipped
        let text = format!("{}. {}. {}.", sentence(1), sentence(2), sentence(3));
        let summary = summarize(&text, 2);
        assert!(summary.contains("number 1"));
        assert!(!summary.contains("number 2"));
        assert!(summary.contains("number 3"));
    }
}
