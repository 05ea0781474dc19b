//! Flat-file note storage.
//!
//! Notes live in a single JSON file (`{"notes": [...]}`). Writes are
//! serialized behind a mutex so concurrent requests cannot interleave
//! read-modify-write cycles.

use crate::error::{NotatError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

/// Origin of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    /// Generated from a YouTube video.
    Youtube,
    /// Generated from an uploaded meeting recording.
    Meet,
}

impl std::fmt::Display for NoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteType::Youtube => write!(f, "youtube"),
            NoteType::Meet => write!(f, "meet"),
        }
    }
}

/// A persisted note record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// On-disk shape of the notes file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct NotesFile {
    notes: Vec<Note>,
}

/// JSON-file-backed note store.
pub struct JsonNoteStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonNoteStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Add a new note and return the stored record.
    pub fn add(
        &self,
        note_type: NoteType,
        title: &str,
        content: &str,
        metadata: HashMap<String, String>,
    ) -> Result<Note> {
        let note = Note {
            id: Uuid::new_v4(),
            note_type,
            timestamp: Utc::now(),
            title: title.to_string(),
            content: content.to_string(),
            metadata,
        };

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| NotatError::Storage("Note store lock poisoned".to_string()))?;

        let mut file = self.load()?;
        file.notes.push(note.clone());
        self.save(&file)?;

        Ok(note)
    }

    /// All notes, newest first.
    pub fn all(&self) -> Result<Vec<Note>> {
        let mut notes = self.load()?.notes;
        notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(notes)
    }

    /// Look up a note by id.
    pub fn get(&self, id: &Uuid) -> Result<Option<Note>> {
        Ok(self.load()?.notes.into_iter().find(|n| &n.id == id))
    }

    fn load(&self) -> Result<NotesFile> {
        if !self.path.exists() {
            return Ok(NotesFile::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(NotesFile::default());
        }

        serde_json::from_str(&content)
            .map_err(|e| NotatError::Storage(format!("Corrupt notes file: {}", e)))
    }

    fn save(&self, file: &NotesFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(file)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonNoteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonNoteStore::new(&dir.path().join("notes.json"));
        (dir, store)
    }

    #[test]
    fn test_add_and_get() {
        let (_dir, store) = temp_store();

        let mut metadata = HashMap::new();
        metadata.insert("url".to_string(), "https://youtu.be/abc".to_string());

        let note = store
            .add(NoteType::Youtube, "A title", "Some content", metadata)
            .unwrap();

        let fetched = store.get(&note.id).unwrap().unwrap();
        assert_eq!(fetched.title, "A title");
        assert_eq!(fetched.note_type, NoteType::Youtube);
        assert_eq!(fetched.metadata["url"], "https://youtu.be/abc");
    }

    #[test]
    fn test_all_newest_first() {
        let (_dir, store) = temp_store();

        store
            .add(NoteType::Youtube, "older", "c1", HashMap::new())
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store
            .add(NoteType::Meet, "newer", "c2", HashMap::new())
            .unwrap();

        let notes = store.all().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "newer");
        assert_eq!(notes[1].title, "older");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.all().unwrap().is_empty());
        assert!(store.get(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_type_tag_serialization() {
        let (_dir, store) = temp_store();
        store
            .add(NoteType::Meet, "meeting", "notes", HashMap::new())
            .unwrap();

        let notes = store.all().unwrap();
        let json = serde_json::to_value(&notes[0]).unwrap();
        assert_eq!(json["type"], "meet");
    }
}
