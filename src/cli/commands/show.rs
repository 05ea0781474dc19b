//! Show command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::store::JsonNoteStore;
use anyhow::Result;
use uuid::Uuid;

/// Run the show command.
pub fn run_show(id: &str, settings: Settings) -> Result<()> {
    let id: Uuid = id
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid note id: {}", id))?;

    let store = JsonNoteStore::new(&settings.notes_path());

    match store.get(&id)? {
        Some(note) => {
            Output::kv("Title", &note.title);
            Output::kv("Type", &note.note_type.to_string());
            Output::kv("Created", &note.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
            println!();
            println!("{}", note.content);
            Ok(())
        }
        None => {
            Output::error(&format!("Note not found: {}", id));
            Err(anyhow::anyhow!("Note not found: {}", id))
        }
    }
}
