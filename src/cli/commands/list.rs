//! List command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::store::JsonNoteStore;
use anyhow::Result;

/// Run the list command.
pub fn run_list(settings: Settings) -> Result<()> {
    let store = JsonNoteStore::new(&settings.notes_path());

    let notes = store.all()?;
    if notes.is_empty() {
        Output::info("No notes saved yet. Use 'notat generate <url>' to create some.");
        return Ok(());
    }

    Output::header(&format!("Saved Notes ({})", notes.len()));
    println!();

    for note in &notes {
        Output::note_info(
            &note.title,
            &note.id.to_string(),
            &note.note_type.to_string(),
            &note.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        );
    }

    Ok(())
}
