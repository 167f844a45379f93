//! Download a video with sidecar metadata using yt-dlp
//!
//! Fetches the video in the requested quality along with info JSON,
//! description, thumbnail, and English subtitle sidecars. On failure a
//! single simplified retry is attempted unless disabled.

use clap::Parser;
use tracing::warn;

use video_chapter_tools::core::models::{AppResult, FetchRequest};
use video_chapter_tools::utils::logging::init_tracing;
use video_chapter_tools::utils::validation::validate_url;
use video_chapter_tools::{AppConfig, Fetcher, FetcherConfig};

#[derive(Parser, Debug)]
#[command(name = "fetch-video", version, about = "Download videos with embedded chapters")]
struct Cli {
    /// Video URL
    url: String,

    /// Output directory
    #[arg(short, long)]
    output: Option<String>,

    /// Video format selector (default: bestvideo+bestaudio/best)
    #[arg(short, long)]
    format: Option<String>,

    /// Don't embed chapters
    #[arg(long)]
    no_chapters: bool,

    /// Don't retry with simplified options on failure
    #[arg(long)]
    no_fallback: bool,

    /// List available formats and exit
    #[arg(long)]
    list_formats: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    validate_url(&cli.url)?;

    let config = load_config();
    let fetcher = Fetcher::new(FetcherConfig::from_fetch_config(&config.fetch));

    if cli.list_formats {
        return fetcher.list_formats(&cli.url).await;
    }

    let request = FetchRequest {
        url: cli.url,
        output_dir: cli.output.unwrap_or(config.fetch.output_directory),
        format_selector: cli.format.unwrap_or(config.fetch.format_selector),
        embed_chapters: !cli.no_chapters && config.fetch.embed_chapters,
        use_fallback: !cli.no_fallback && config.fetch.use_fallback,
    };

    let outcome = fetcher.fetch(&request).await?;

    let output_dir = std::fs::canonicalize(&request.output_dir)?;
    println!("\n📁 Files saved to: {}", output_dir.display());
    println!("\n📄 Downloaded files:");
    for file in &outcome.files {
        println!("  - {} ({:.1} MB)", file.name, file.size_mb());
    }

    Ok(())
}

fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(
                    "Invalid configuration detected ({}), falling back to defaults",
                    err
                );
                AppConfig::default()
            }
        },
        Err(err) => {
            warn!(
                "Failed to load configuration from disk: {}. Using defaults",
                err
            );
            AppConfig::default()
        }
    }
}
