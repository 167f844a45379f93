//! Core business logic module
//!
//! This module contains the domain models, configuration, and the yt-dlp /
//! ffmpeg orchestration for the fetch and embed tools.

pub mod chapters;
pub mod config;
pub mod embedder;
pub mod fetcher;
pub mod models;

#[cfg(test)]
mod integration_tests;

// Re-export commonly used types
pub use config::AppConfig;
pub use embedder::{Embedder, EmbedderConfig};
pub use fetcher::{Fetcher, FetcherConfig};
