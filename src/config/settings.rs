//! Configuration settings for Notat.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub notes: NotesSettings,
    pub storage: StorageSettings,
    pub uploads: UploadSettings,
    pub gemini: GeminiSettings,
    pub server: ServerSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data.
    pub data_dir: String,
    /// Directory for temporary files (audio uploads).
    pub temp_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.notat".to_string(),
            temp_dir: "/tmp/notat".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Which engine turns media into notes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotesEngine {
    /// Transcript extraction plus heuristic analysis (default, no API key).
    #[default]
    Heuristic,
    /// Hosted generative model (Gemini).
    Gemini,
}

impl std::str::FromStr for NotesEngine {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heuristic" | "transcript" => Ok(NotesEngine::Heuristic),
            "gemini" | "llm" => Ok(NotesEngine::Gemini),
            _ => Err(format!("Unknown notes engine: {}", s)),
        }
    }
}

impl std::fmt::Display for NotesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotesEngine::Heuristic => write!(f, "heuristic"),
            NotesEngine::Gemini => write!(f, "gemini"),
        }
    }
}

/// Output verbosity, mapped to a target summary sentence count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Brief,
    #[default]
    Medium,
    Detailed,
}

impl DetailLevel {
    /// Target sentence count for the extractive summary.
    pub fn summary_sentences(&self) -> usize {
        match self {
            DetailLevel::Brief => 2,
            DetailLevel::Medium => 4,
            DetailLevel::Detailed => 6,
        }
    }
}

impl std::str::FromStr for DetailLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brief" => Ok(DetailLevel::Brief),
            "medium" => Ok(DetailLevel::Medium),
            "detailed" => Ok(DetailLevel::Detailed),
            _ => Err(format!("Unknown detail level: {}", s)),
        }
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailLevel::Brief => write!(f, "brief"),
            DetailLevel::Medium => write!(f, "medium"),
            DetailLevel::Detailed => write!(f, "detailed"),
        }
    }
}

/// Requested notes layout. The heuristic engine always produces its
/// structured document; the generative engine honors the choice in its prompt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoteFormat {
    #[default]
    Bullet,
    Paragraph,
}

impl std::str::FromStr for NoteFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bullet" | "bullets" => Ok(NoteFormat::Bullet),
            "paragraph" | "paragraphs" => Ok(NoteFormat::Paragraph),
            _ => Err(format!("Unknown note format: {}", s)),
        }
    }
}

impl std::fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteFormat::Bullet => write!(f, "bullet"),
            NoteFormat::Paragraph => write!(f, "paragraph"),
        }
    }
}

/// Note generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesSettings {
    /// Engine for YouTube note generation (heuristic, gemini).
    pub engine: NotesEngine,
    /// Number of key phrases to extract.
    pub key_phrases: usize,
    /// Default detail level (brief, medium, detailed).
    pub detail_level: DetailLevel,
    /// Default layout (bullet, paragraph).
    pub format: NoteFormat,
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            engine: NotesEngine::Heuristic,
            key_phrases: 8,
            detail_level: DetailLevel::Medium,
            format: NoteFormat::Bullet,
        }
    }
}

/// Note storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Path to the JSON notes file.
    pub notes_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            notes_path: "~/.notat/notes.json".to_string(),
        }
    }
}

/// Audio upload settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// Maximum upload size in megabytes.
    pub max_size_mb: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self { max_size_mb: 100 }
    }
}

/// Gemini API settings (for the generative engine and audio notes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// API key. Falls back to the GEMINI_API_KEY environment variable.
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// Seconds between uploaded-file state polls.
    pub poll_interval_seconds: u64,
    /// Maximum total seconds to wait for an uploaded file to become ready.
    pub max_wait_seconds: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            poll_interval_seconds: 2,
            max_wait_seconds: 180,
        }
    }
}

impl GeminiSettings {
    /// Resolve the API key from settings or the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()))
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::NotatError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notat")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }

    /// Get the expanded temp directory path.
    pub fn temp_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.temp_dir)
    }

    /// Get the expanded notes file path.
    pub fn notes_path(&self) -> PathBuf {
        Self::expand_path(&self.storage.notes_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.notes.engine, NotesEngine::Heuristic);
        assert_eq!(settings.notes.key_phrases, 8);
        assert_eq!(settings.gemini.model, "gemini-2.5-flash");
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn test_detail_level_parsing() {
        assert_eq!("brief".parse::<DetailLevel>().unwrap(), DetailLevel::Brief);
        assert_eq!("MEDIUM".parse::<DetailLevel>().unwrap(), DetailLevel::Medium);
        assert!("verbose".parse::<DetailLevel>().is_err());

        assert_eq!(DetailLevel::Brief.summary_sentences(), 2);
        assert_eq!(DetailLevel::Medium.summary_sentences(), 4);
        assert_eq!(DetailLevel::Detailed.summary_sentences(), 6);
    }

    #[test]
    fn test_roundtrip_toml() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.notes.detail_level, settings.notes.detail_level);
        assert_eq!(parsed.storage.notes_path, settings.storage.notes_path);
    }
}
