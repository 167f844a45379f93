//! Core data models shared by the fetch and embed tools

use serde::{Deserialize, Serialize};

/// A single fetch request, built from CLI arguments and config defaults

#[derive(Debug, Clone, Serialize, Deserialize)]

pub struct FetchRequest {
    pub url: String,

    pub output_dir: String,

    pub format_selector: String,

    pub embed_chapters: bool,

    pub use_fallback: bool,
}

/// A named time range inside a video, as found in the yt-dlp info JSON
///
/// `start_time` and `end_time` may carry fractional seconds; they are
/// truncated to whole seconds when rendered into ffmetadata.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]

pub struct Chapter {
    pub title: String,

    pub start_time: f64,

    pub end_time: f64,
}

/// The subset of the yt-dlp info JSON sidecar we consume
///
/// A sidecar without a `chapters` field deserializes to an empty list.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]

pub struct ChapterSidecar {
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// One regular file produced by a fetch, reported on success

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]

pub struct DownloadedFile {
    pub name: String,

    pub size_bytes: u64,
}

impl DownloadedFile {
    /// File size in megabytes, for the success report
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Outcome of a successful fetch

#[derive(Debug, Clone)]

pub struct FetchOutcome {
    pub fallback_used: bool,

    pub files: Vec<DownloadedFile>,
}

/// Application error types

#[derive(Debug, thiserror::Error)]

pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{tool} not found. Please install it first.")]
    ToolNotFound { tool: String },

    #[error("{tool} failed with exit code {code:?}")]
    Tool { tool: String, code: Option<i32> },

    #[error("Both attempts failed. The video might be restricted or unavailable.")]
    Unavailable,

    #[error("No chapters found in info JSON")]
    NoChapters,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for application operations

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_without_chapters_field() {
        let sidecar: ChapterSidecar = serde_json::from_str(r#"{"title": "Some Video"}"#).unwrap();
        assert!(sidecar.chapters.is_empty());
    }

    #[test]
    fn test_sidecar_with_chapters() {
        let sidecar: ChapterSidecar = serde_json::from_str(
            r#"{"chapters":[{"start_time":0,"end_time":65.7,"title":"Intro"}]}"#,
        )
        .unwrap();

        assert_eq!(sidecar.chapters.len(), 1);
        assert_eq!(sidecar.chapters[0].title, "Intro");
        assert_eq!(sidecar.chapters[0].start_time, 0.0);
        assert_eq!(sidecar.chapters[0].end_time, 65.7);
    }

    #[test]
    fn test_downloaded_file_size_mb() {
        let file = DownloadedFile {
            name: "video.mp4".to_string(),
            size_bytes: 3 * 1024 * 1024,
        };
        assert_eq!(file.size_mb(), 3.0);
    }
}
