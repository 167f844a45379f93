//! Embed chapters from a yt-dlp info JSON into a video file using ffmpeg
//!
//! Streams are copied without re-encoding; only container metadata is
//! replaced. The output lands next to the input with a `_with_chapters`
//! suffix before the extension.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use video_chapter_tools::core::models::AppError;
use video_chapter_tools::utils::logging::init_tracing;
use video_chapter_tools::{AppConfig, Embedder, EmbedderConfig};

#[derive(Parser, Debug)]
#[command(
    name = "embed-chapters",
    version,
    about = "Embed sidecar chapters into a video without re-encoding"
)]
struct Cli {
    /// Video file to embed chapters into
    video: PathBuf,

    /// yt-dlp info JSON sidecar holding the chapter list
    info_json: PathBuf,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(
                "Failed to load configuration from disk: {}. Using defaults",
                err
            );
            AppConfig::default()
        }
    };

    let embedder = Embedder::new(EmbedderConfig::from_embed_config(&config.embed));

    match embedder.embed(&cli.video, &cli.info_json).await {
        Ok(output) => {
            println!("Output: {}", output.display());
        }
        Err(AppError::NoChapters) => {
            eprintln!("No chapters found in info JSON.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
