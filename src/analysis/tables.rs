//! Static keyword and pattern tables for the heuristic pipeline.
//!
//! Pure data, kept out of the extractors so tests can substitute smaller
//! tables. All matching against these tables is case-insensitive.

/// Common English function words and contractions excluded from key-phrase
/// candidates.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "shall", "should", "may", "might", "must", "can", "could", "i", "you", "he", "she",
    "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "this", "that", "these", "those", "am", "so", "then", "than", "just", "also", "very",
    "what", "which", "who", "whom", "whose", "where", "when", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "too", "s", "t", "don", "don't", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't",
    "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
    "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Conversational filler removed from transcripts word-by-word.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "actually", "basically", "literally", "sort of", "kind of",
    "i mean", "okay", "so", "right", "well", "hmm", "ah", "er", "umm", "uhh", "guys", "yaar",
    "dude", "bro", "hey", "hello", "hi", "welcome back", "folks",
];

/// Call-to-action phrases; removal extends to the next sentence terminator.
pub const CTA_PHRASES: &[&str] = &[
    "subscribe", "like the video", "hit the bell", "notification", "channel", "please share",
    "comment below", "don't forget to", "smash that", "ring the bell", "hit that like button",
];

/// Topic buckets in declaration order, each with its trigger keywords.
/// A sentence goes to the first bucket whose keyword it contains.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Introduction",
        &["introduction", "overview", "welcome", "start", "beginning"],
    ),
    (
        "Background",
        &["background", "history", "context", "previous", "before"],
    ),
    (
        "Method",
        &["method", "approach", "technique", "process", "procedure"],
    ),
    (
        "Results",
        &["result", "finding", "outcome", "conclusion", "summary"],
    ),
    (
        "Application",
        &["application", "use", "practice", "implementation", "example"],
    ),
    (
        "Advantages",
        &["advantage", "benefit", "pro", "strength", "positive"],
    ),
    (
        "Disadvantages",
        &["disadvantage", "limitation", "drawback", "con", "negative"],
    ),
    (
        "Conclusion",
        &["conclusion", "summary", "wrap up", "final", "ending"],
    ),
];

/// Bucket name for sentences that match no topic.
pub const OTHER_TOPIC: &str = "Other";

/// Sentence-level cue patterns for definitions, in declaration order.
pub const DEFINITION_PATTERNS: &[&str] = &[
    r"(?i)[^.!?]*\b(?:is defined as|means|refers to|is called|is known as)\b[^.!?]*[.!?]",
    r"(?i)[^.!?]*\b(?:definition of|define)\b[^.!?]*[.!?]",
];

/// Sentence-level cue patterns for examples, in declaration order.
pub const EXAMPLE_PATTERNS: &[&str] = &[
    r"(?i)[^.!?]*\b(?:for example|for instance|such as|like|including|e\.g\.)\b[^.!?]*[.!?]",
    r"(?i)[^.!?]*\b(?:example|instance)\b[^.!?]*[.!?]",
];

/// Sentence-level cue patterns for procedural steps, in declaration order.
pub const STEP_PATTERNS: &[&str] = &[
    r"(?i)[^.!?]*\b(?:step \d+|first|second|third|fourth|fifth|next|then|finally|lastly)\b[^.!?]*[.!?]",
    r"(?i)[^.!?]*\b\d+\.\s+[^.!?]*[.!?]",
];

/// Ordinal and sequencing words stripped out of step text before formatting.
pub const STEP_CUE_STRIP: &str =
    r"(?i)\b(?:step\s+\d+|first|second|third|fourth|fifth|next|then|finally|lastly)\b";

/// Date shapes: slash/dash-delimited numeric dates, then month-name dates.
pub const DATE_PATTERNS: &[&str] = &[
    r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b",
    r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{1,2},? \d{4}\b",
];

/// Integer and decimal tokens.
pub const NUMBER_PATTERN: &str = r"\b\d+\.?\d*\b";

/// Description lines that look like a chapter outline or timestamp index.
pub const OUTLINE_MARKERS: &[&str] = &[
    "chapter", "topic", "section", "part", "00:", "0:", "1:", "2:", "3:", "4:", "5:", "6:", "7:",
    "8:", "9:",
];
