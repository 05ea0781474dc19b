//! Configuration module for Notat.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    DetailLevel, GeminiSettings, GeneralSettings, NoteFormat, NotesEngine, NotesSettings,
    ServerSettings, Settings, StorageSettings, UploadSettings,
};
