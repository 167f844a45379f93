//! Chapter embedding via ffmpeg stream copy
//!
//! Writes the rendered ffmetadata text next to the input video, then asks
//! ffmpeg to copy the audio/video streams verbatim while taking container
//! metadata from that file. The intermediate file is left on disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::chapters::{load_chapters, render_ffmetadata};
use crate::core::config::EmbedConfig;
use crate::core::models::{AppError, AppResult};

/// Embedder configuration
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// Name or path of the ffmpeg binary
    pub binary: String,
    /// Suffix inserted before the extension of the output file
    pub output_suffix: String,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
            output_suffix: EmbedConfig::default().output_suffix,
        }
    }
}

impl EmbedderConfig {
    /// Build an embedder configuration from the persisted embed config
    pub fn from_embed_config(config: &EmbedConfig) -> Self {
        Self {
            binary: "ffmpeg".to_string(),
            output_suffix: config.output_suffix.clone(),
        }
    }
}

/// Embeds sidecar chapters into a video container
#[derive(Debug, Clone)]
pub struct Embedder {
    config: EmbedderConfig,
}

impl Embedder {
    pub fn new(config: EmbedderConfig) -> Self {
        Self { config }
    }

    /// Output path derived from the video path, suffix before the extension
    pub fn output_path_for(&self, video_path: &Path) -> PathBuf {
        let stem = video_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file_name = match video_path.extension() {
            Some(ext) => format!(
                "{}{}.{}",
                stem,
                self.config.output_suffix,
                ext.to_string_lossy()
            ),
            None => format!("{}{}", stem, self.config.output_suffix),
        };

        video_path.with_file_name(file_name)
    }

    /// Path of the intermediate ffmetadata file, next to the video
    pub fn metadata_path_for(&self, video_path: &Path) -> PathBuf {
        video_path.with_extension("ffmetadata")
    }

    /// Embed the sidecar's chapters into the video, returning the output path
    ///
    /// Fails with `NoChapters` before any tool invocation when the sidecar
    /// carries no chapter list.
    pub async fn embed(&self, video_path: &Path, sidecar_path: &Path) -> AppResult<PathBuf> {
        let chapters = load_chapters(sidecar_path)?;
        if chapters.is_empty() {
            return Err(AppError::NoChapters);
        }

        let metadata_path = self.metadata_path_for(video_path);
        std::fs::write(&metadata_path, render_ffmetadata(&chapters))?;
        info!("Chapters metadata written to {:?}", metadata_path);

        let output_path = self.output_path_for(video_path);
        self.run_ffmpeg(video_path, &metadata_path, &output_path)
            .await?;

        info!("✅ Chapters embedded: {:?}", output_path);
        Ok(output_path)
    }

    /// Stream-copy the video while replacing container metadata
    async fn run_ffmpeg(
        &self,
        video_path: &Path,
        metadata_path: &Path,
        output_path: &Path,
    ) -> AppResult<()> {
        debug!(
            "Running: {} -i {:?} -i {:?} -map_metadata 1 -codec copy {:?}",
            self.config.binary, video_path, metadata_path, output_path
        );

        let status = tokio::process::Command::new(&self.config.binary)
            .arg("-i")
            .arg(video_path)
            .arg("-i")
            .arg(metadata_path)
            .args(["-map_metadata", "1", "-codec", "copy"])
            .arg(output_path)
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => AppError::ToolNotFound {
                    tool: self.config.binary.clone(),
                },
                _ => AppError::Io(e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Tool {
                tool: self.config.binary.clone(),
                code: status.code(),
            })
        }
    }
}
