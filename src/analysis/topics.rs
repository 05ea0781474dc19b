//! Topic bucketing of transcript sentences.

use super::split_sentences;
use super::tables::{OTHER_TOPIC, TOPIC_KEYWORDS};

/// Sentence length floors for topic and catch-all assignment.
const MIN_TOPIC_SENTENCE_CHARS: usize = 20;
const MIN_OTHER_SENTENCE_CHARS: usize = 30;

/// Maximum sentences retained per topic.
const MAX_SENTENCES_PER_TOPIC: usize = 5;

/// A named topic with the sentences assigned to it.
#[derive(Debug, Clone)]
pub struct TopicBucket {
    pub name: String,
    pub sentences: Vec<String>,
}

/// Organize sentences into topic buckets using the fixed keyword tables.
pub fn organize_topics(text: &str) -> Vec<TopicBucket> {
    organize_with(TOPIC_KEYWORDS, text)
}

/// Organize sentences using an explicit topic table (tests use smaller ones).
///
/// A sentence lands in the first topic whose keyword it contains; unmatched
/// sentences longer than the catch-all floor land in "Other". Empty buckets
/// are dropped, declaration order is preserved, and "Other" sorts last.
pub fn organize_with(tables: &[(&str, &[&str])], text: &str) -> Vec<TopicBucket> {
    let mut buckets: Vec<TopicBucket> = tables
        .iter()
        .map(|(name, _)| TopicBucket {
            name: name.to_string(),
            sentences: Vec::new(),
        })
        .collect();
    let mut other = TopicBucket {
        name: OTHER_TOPIC.to_string(),
        sentences: Vec::new(),
    };

    for sentence in split_sentences(text) {
        let lowered = sentence.to_lowercase();

        let matched = tables.iter().position(|(_, keywords)| {
            keywords.iter().any(|keyword| lowered.contains(keyword))
        });

        match matched {
            Some(index) if sentence.len() > MIN_TOPIC_SENTENCE_CHARS => {
                buckets[index].sentences.push(sentence);
            }
            Some(_) => {}
            None if sentence.len() > MIN_OTHER_SENTENCE_CHARS => {
                other.sentences.push(sentence);
            }
            None => {}
        }
    }

    buckets.push(other);
    buckets.retain(|b| !b.sentences.is_empty());
    for bucket in &mut buckets {
        bucket.sentences.truncate(MAX_SENTENCES_PER_TOPIC);
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_declared_topic_wins() {
        // Contains both an "Introduction" keyword and a "Results" keyword;
        // Introduction is declared first in the table
        let text = "This introduction gives a summary of everything we cover today.";
        let buckets = organize_topics(text);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name, "Introduction");
    }

    #[test]
    fn test_unmatched_sentences_go_to_other() {
        let text = "Quantum entanglement correlates distant particles in strange ways.";
        let buckets = organize_topics(text);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name, "Other");
    }

    #[test]
    fn test_empty_buckets_omitted_and_other_last() {
        let text = "The method we apply here is gradient descent optimization. \
                    Llamas and alpacas both live in the high Andes mountains.";
        let buckets = organize_topics(text);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "Method");
        assert_eq!(buckets[1].name, "Other");
    }

    #[test]
    fn test_short_sentences_dropped() {
        // Matches "Method" but is under the 21-character floor
        let buckets = organize_topics("A fine method.");
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_sentences_capped_per_topic() {
        let text = (0..8)
            .map(|i| format!("The process for stage {} needs a careful walkthrough. ", i))
            .collect::<String>();

        let buckets = organize_topics(&text);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name, "Method");
        assert_eq!(buckets[0].sentences.len(), 5);
    }
}
