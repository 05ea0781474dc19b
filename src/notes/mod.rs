//! Notes document assembly.
//!
//! Deterministic markdown assembly from analyzer output: fixed section
//! order, numbered lists, placeholder sentences for empty sub-results, and
//! a stats block derived from the cleaned transcript.

use crate::analysis::tables::STEP_CUE_STRIP;
use crate::analysis::AnalysisResult;
use crate::source::VideoMetadata;
use regex::Regex;

/// Numbers shown in the numeric data section.
const MAX_NUMBERS_SHOWN: usize = 8;

/// Fixed takeaway bullets appended to every document.
const TAKEAWAYS: &[&str] = &[
    "Focus on the main concepts mentioned in key phrases",
    "Review numerical data and dates for important facts",
    "Understand definitions provided in the video",
    "Follow step-by-step processes for practical application",
    "Note examples for better understanding",
];

/// Assembles the final notes document.
pub struct NotesFormatter {
    step_cues: Regex,
}

impl NotesFormatter {
    pub fn new() -> Self {
        Self {
            step_cues: Regex::new(STEP_CUE_STRIP).expect("Invalid step cue pattern"),
        }
    }

    /// Build the notes document for a video.
    ///
    /// `transcript` is the cleaned transcript the analysis was derived from;
    /// it feeds the header character count and the stats block.
    pub fn format(
        &self,
        metadata: &VideoMetadata,
        analysis: &AnalysisResult,
        transcript: &str,
    ) -> String {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut doc = format!(
            "# 📝 VIDEO NOTES: {}\n\n\
             **⏱️ Duration:** {}  \n\
             **📄 Transcript Length:** {} characters  \n\
             **📅 Generated:** {}\n\n\
             ---\n\n\
             ## 📋 EXECUTIVE SUMMARY\n\n{}\n\n\
             ## 🔑 KEY PHRASES & CONCEPTS\n\n",
            metadata.title,
            format_duration(metadata.duration_seconds),
            transcript.chars().count(),
            generated,
            analysis.summary,
        );

        for (i, phrase) in analysis.key_phrases.iter().enumerate() {
            doc.push_str(&format!("{}. {}.\n", i + 1, phrase));
        }

        doc.push_str("\n## 📊 IMPORTANT NUMERICAL DATA\n");
        if analysis.numbers.is_empty() {
            doc.push_str("No specific numerical data found.\n");
        } else {
            for number in analysis.numbers.iter().take(MAX_NUMBERS_SHOWN) {
                doc.push_str(&format!("- {}\n", number));
            }
        }

        // Dates section is omitted entirely when empty
        if !analysis.dates.is_empty() {
            doc.push_str("\n## 📅 DATES MENTIONED\n");
            for date in &analysis.dates {
                doc.push_str(&format!("- {}\n", date));
            }
        }

        doc.push_str("\n## 📖 KEY DEFINITIONS\n");
        if analysis.definitions.is_empty() {
            doc.push_str("No explicit definitions found in transcript.\n");
        } else {
            for (i, definition) in analysis.definitions.iter().enumerate() {
                doc.push_str(&format!("{}. {}\n", i + 1, definition));
            }
        }

        doc.push_str("\n## 💡 EXAMPLES PROVIDED\n");
        if analysis.examples.is_empty() {
            doc.push_str("No specific examples identified.\n");
        } else {
            for (i, example) in analysis.examples.iter().enumerate() {
                doc.push_str(&format!("{}. {}\n", i + 1, example));
            }
        }

        doc.push_str("\n## 🚀 STEP-BY-STEP PROCESSES\n");
        if analysis.steps.is_empty() {
            doc.push_str("No clear step-by-step process identified.\n");
        } else {
            let mut step_number = 0;
            for step in &analysis.steps {
                let cleaned = self.strip_step_cues(step);
                if !cleaned.is_empty() {
                    step_number += 1;
                    doc.push_str(&format!("**Step {}:** {}\n", step_number, cleaned));
                }
            }
        }

        doc.push_str("\n## 🗂️ CONTENT ORGANIZED BY TOPIC\n");
        for topic in &analysis.topics {
            doc.push_str(&format!("\n### {}\n", topic.name.to_uppercase()));
            for (i, sentence) in topic.sentences.iter().enumerate() {
                doc.push_str(&format!("{}. {}.\n", i + 1, sentence));
            }
        }

        let sentence_count = transcript.matches(['.', '!', '?']).count();
        doc.push_str(&format!(
            "\n## 📈 CONTENT ANALYSIS\n\
             - **Total meaningful content:** {} sentences\n\
             - **Key topics identified:** {}\n\
             - **Technical terms:** {}\n\
             - **Procedural content:** {}\n",
            sentence_count,
            analysis.topics.len(),
            analysis.key_phrases.len(),
            if analysis.has_steps() { "Yes" } else { "No" },
        ));

        doc.push_str("\n## 💎 KEY TAKEAWAYS\n");
        for (i, takeaway) in TAKEAWAYS.iter().enumerate() {
            doc.push_str(&format!("{}. {}\n", i + 1, takeaway));
        }

        doc.push_str(
            "\n---\n\
             *Notes automatically generated from YouTube transcript.*\n\
             *For optimal results, use videos with clear English captions and educational content.*\n",
        );

        doc
    }

    /// Strip ordinal/sequencing cue words from a step and renormalize spacing.
    fn strip_step_cues(&self, step: &str) -> String {
        let stripped = self.step_cues.replace_all(step, "");
        let trimmed = stripped
            .trim()
            .trim_start_matches([',', ':', ';'])
            .trim()
            .to_string();
        trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for NotesFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a duration as "Hh Mm Ss", dropping the hour component when zero.
fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "Unknown".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else {
        format!("{}m {}s", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextAnalyzer;
    use crate::config::DetailLevel;

    fn metadata() -> VideoMetadata {
        VideoMetadata {
            title: "Test Video".to_string(),
            duration_seconds: 3725,
            description: String::new(),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "Unknown");
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(150), "2m 30s");
        assert_eq!(format_duration(3725), "1h 2m 5s");
    }

    #[test]
    fn test_format_contains_fixed_sections() {
        let analyzer = TextAnalyzer::new(8);
        let formatter = NotesFormatter::new();
        let transcript = "This transcript discusses the method of building parsers carefully. \
                          The outcome is a working result for everyone involved in the project.";

        let analysis = analyzer.analyze(transcript, DetailLevel::Medium);
        let doc = formatter.format(&metadata(), &analysis, transcript);

        assert!(doc.contains("# 📝 VIDEO NOTES: Test Video"));
        assert!(doc.contains("**⏱️ Duration:** 1h 2m 5s"));
        assert!(doc.contains("## 📋 EXECUTIVE SUMMARY"));
        assert!(doc.contains("## 📖 KEY DEFINITIONS"));
        assert!(doc.contains("## 💡 EXAMPLES PROVIDED"));
        assert!(doc.contains("## 📈 CONTENT ANALYSIS"));
        assert!(doc.contains("## 💎 KEY TAKEAWAYS"));
    }

    #[test]
    fn test_format_placeholders_for_empty_results() {
        let analyzer = TextAnalyzer::new(8);
        let formatter = NotesFormatter::new();
        let transcript = "Plain talk about nothing in particular continues for a while here.";

        let analysis = analyzer.analyze(transcript, DetailLevel::Medium);
        let doc = formatter.format(&metadata(), &analysis, transcript);

        assert!(doc.contains("No specific numerical data found."));
        assert!(doc.contains("No explicit definitions found in transcript."));
        assert!(doc.contains("No clear step-by-step process identified."));
        // Empty dates omit the section entirely
        assert!(!doc.contains("DATES MENTIONED"));
    }

    #[test]
    fn test_format_sample_transcript_sections() {
        let analyzer = TextAnalyzer::new(8);
        let formatter = NotesFormatter::new();
        let transcript = "Welcome back guys. First, install the tool. For example, you can use \
                          version 2.0. The process is defined as a pipeline. Finally, run the script.";

        let analysis = analyzer.analyze(transcript, DetailLevel::Brief);
        let doc = formatter.format(&metadata(), &analysis, transcript);

        assert!(doc.contains("**Step 1:** install the tool"));
        assert!(doc.contains("**Step 2:** run the script"));
        assert!(doc.contains("is defined as"));
        assert!(doc.contains("For example"));
        assert!(!doc.contains("No summary available."));
    }
}
