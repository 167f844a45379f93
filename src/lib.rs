//! Video Chapter Tools - Core Library
//!
//! This library backs the `fetch-video` and `embed-chapters` binaries:
//! thin orchestration around yt-dlp and ffmpeg that assembles arguments,
//! runs the tools, and reports outcomes. All media parsing, fetching, and
//! muxing is delegated to the external binaries.

pub mod core;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    chapters::{load_chapters, render_ffmetadata},
    config::AppConfig,
    embedder::{Embedder, EmbedderConfig},
    fetcher::{Fetcher, FetcherConfig},
    models::{AppError, AppResult, Chapter, DownloadedFile, FetchOutcome, FetchRequest},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
