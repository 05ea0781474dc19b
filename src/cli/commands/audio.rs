//! Audio command implementation.

use super::generate::resolve;
use crate::audio;
use crate::cli::Output;
use crate::config::Settings;
use crate::error::NotatError;
use crate::orchestrator::Orchestrator;
use crate::store::NoteType;
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Run the audio command.
pub async fn run_audio(
    file: &PathBuf,
    detail: Option<String>,
    format: Option<String>,
    output: Option<PathBuf>,
    no_save: bool,
    settings: Settings,
) -> Result<()> {
    let detail = resolve(detail, settings.notes.detail_level, "detail level")?;
    let format = resolve(format, settings.notes.format, "note format")?;

    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !audio::is_allowed(&filename) {
        let err = NotatError::InvalidUpload(format!(
            "Unsupported audio format: {} (allowed: {})",
            filename,
            audio::ALLOWED_EXTENSIONS.join(", ")
        ));
        Output::error(&format!("{}", err));
        return Err(err.into());
    }

    let orchestrator = Orchestrator::new(settings);

    let spinner = Output::spinner("Transcribing and summarizing audio...");
    let result = orchestrator.generate_from_audio(file, detail, format).await;
    spinner.finish_and_clear();

    let document = match result {
        Ok(document) => document,
        Err(e) => {
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    };

    if !no_save {
        let title = format!("Meeting Notes - {}", filename);
        let metadata = HashMap::from([
            ("filename".to_string(), filename.clone()),
            ("detail_level".to_string(), detail.to_string()),
            ("format_type".to_string(), format.to_string()),
        ]);
        let saved = orchestrator
            .store()
            .add(NoteType::Meet, &title, &document, metadata)?;
        Output::success(&format!("Saved note {}", saved.id));
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &document)?;
            Output::success(&format!("Notes written to {}", path.display()));
        }
        None => {
            println!("{}", document);
        }
    }

    Ok(())
}
