//! Audio upload handling.
//!
//! Saves uploaded recordings into the temp directory under sanitized names,
//! converts browser formats to mp3 via ffmpeg, and cleans up afterwards.

use crate::error::{NotatError, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, warn};

/// Audio formats accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg", "webm", "m4a"];

/// Check whether a filename carries an allowed audio extension.
pub fn is_allowed(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Path separators and anything outside `[A-Za-z0-9._-]` are replaced, so a
/// name like `../../etc/passwd.mp3` cannot escape the upload directory.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    sanitized.trim_matches('.').to_string()
}

/// Save an uploaded audio payload into the upload directory.
pub fn save_upload(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    if filename.is_empty() {
        return Err(NotatError::InvalidUpload("No file selected".to_string()));
    }
    if !is_allowed(filename) {
        return Err(NotatError::InvalidUpload(format!(
            "Invalid audio file format: {} (allowed: {})",
            filename,
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }
    if bytes.is_empty() {
        return Err(NotatError::InvalidUpload("Audio file is empty".to_string()));
    }

    let name = sanitize_filename(filename);
    if name.is_empty() {
        return Err(NotatError::InvalidUpload(format!(
            "Unusable filename: {}",
            filename
        )));
    }

    std::fs::create_dir_all(upload_dir)?;
    let path = upload_dir.join(name);
    std::fs::write(&path, bytes)?;

    debug!("Saved {} byte upload to {}", bytes.len(), path.display());
    Ok(path)
}

/// Delete a temporary upload, logging rather than failing on error.
pub fn cleanup_file(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Failed to clean up {}: {}", path.display(), e);
        }
    }
}

/// Convert an audio file (e.g. webm from a browser recorder) to mp3.
///
/// Returns the path to the converted file next to the input.
pub async fn convert_to_mp3(input: &Path) -> Result<PathBuf> {
    if !input.exists() {
        return Err(NotatError::InvalidUpload(format!(
            "Input audio file does not exist: {}",
            input.display()
        )));
    }

    let output = input.with_extension("mp3");

    let result = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .arg("-vn")
        .arg("-acodec")
        .arg("libmp3lame")
        .arg("-loglevel")
        .arg("error")
        .arg(&output)
        .output()
        .await;

    match result {
        Ok(out) if out.status.success() => Ok(output),
        Ok(out) => {
            let err = String::from_utf8_lossy(&out.stderr);
            Err(NotatError::ToolFailed(format!(
                "ffmpeg conversion failed: {}",
                err
            )))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(NotatError::ToolNotFound("ffmpeg".to_string()))
        }
        Err(e) => Err(NotatError::ToolFailed(format!("ffmpeg error: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allowed() {
        assert!(is_allowed("recording.mp3"));
        assert!(is_allowed("MEETING.WAV"));
        assert!(is_allowed("call.webm"));
        assert!(!is_allowed("slides.pdf"));
        assert!(!is_allowed("noextension"));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("recording.mp3"), "recording.mp3");
        assert_eq!(sanitize_filename("../../etc/passwd.mp3"), "passwd.mp3");
        assert_eq!(sanitize_filename("my meeting (1).wav"), "my_meeting__1_.wav");
        assert_eq!(sanitize_filename("..\\..\\win.m4a"), "win.m4a");
    }

    #[test]
    fn test_save_upload_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            save_upload(dir.path(), "", b"data"),
            Err(NotatError::InvalidUpload(_))
        ));
        assert!(matches!(
            save_upload(dir.path(), "notes.txt", b"data"),
            Err(NotatError::InvalidUpload(_))
        ));
        assert!(matches!(
            save_upload(dir.path(), "empty.mp3", b""),
            Err(NotatError::InvalidUpload(_))
        ));
    }

    #[test]
    fn test_save_upload_and_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_upload(dir.path(), "clip.mp3", b"audio bytes").unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"audio bytes");

        cleanup_file(&path);
        assert!(!path.exists());
    }
}
