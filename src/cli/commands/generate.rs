//! Generate command implementation.

use crate::cli::Output;
use crate::config::{NotesEngine, Settings};
use crate::orchestrator::Orchestrator;
use crate::store::NoteType;
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Run the generate command.
#[allow(clippy::too_many_arguments)]
pub async fn run_generate(
    url: &str,
    detail: Option<String>,
    format: Option<String>,
    engine: Option<String>,
    output: Option<PathBuf>,
    no_save: bool,
    mut settings: Settings,
) -> Result<()> {
    let detail = resolve(detail, settings.notes.detail_level, "detail level")?;
    let format = resolve(format, settings.notes.format, "note format")?;
    if let Some(engine) = engine {
        settings.notes.engine = engine
            .parse::<NotesEngine>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    let engine = settings.notes.engine;

    let orchestrator = Orchestrator::new(settings);

    let spinner = Output::spinner(&format!("Generating notes with the {} engine...", engine));
    let result = orchestrator.generate_from_url(url, detail, format).await;
    spinner.finish_and_clear();

    let notes = match result {
        Ok(notes) => notes,
        Err(e) => {
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    };

    if !no_save {
        let metadata = HashMap::from([
            ("url".to_string(), url.to_string()),
            ("video_id".to_string(), notes.video_id.clone()),
            ("detail_level".to_string(), detail.to_string()),
            ("format_type".to_string(), format.to_string()),
        ]);
        let saved = orchestrator
            .store()
            .add(NoteType::Youtube, &notes.title, &notes.document, metadata)?;
        Output::success(&format!("Saved note {}", saved.id));
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &notes.document)?;
            Output::success(&format!("Notes written to {}", path.display()));
        }
        None => {
            println!("{}", notes.document);
        }
    }

    Ok(())
}

/// Parse an optional CLI override, falling back to the configured default.
pub(super) fn resolve<T>(raw: Option<String>, default: T, what: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    match raw {
        Some(s) => s
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", what, e)),
        None => Ok(default),
    }
}
