//! Video fetching via yt-dlp
//!
//! Builds the yt-dlp argument list for a fetch request, runs the tool, and
//! on failure retries exactly once with a simplified argument list when the
//! fallback is enabled. The fallback pass drops chapter embedding and all
//! sidecar outputs; that degraded behavior is deliberate for restricted
//! videos that reject the full option set.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::config::FetchConfig;
use crate::core::models::{AppError, AppResult, DownloadedFile, FetchOutcome, FetchRequest};

/// Short user agent sent on the fallback attempt
const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Fetcher configuration
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Name or path of the yt-dlp binary
    pub binary: String,
    /// User agent sent on the primary attempt when fallback mode is enabled
    pub user_agent: String,
    /// Subtitle languages requested as sidecars
    pub subtitle_languages: Vec<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        let defaults = FetchConfig::default();
        Self {
            binary: "yt-dlp".to_string(),
            user_agent: defaults.user_agent,
            subtitle_languages: defaults.subtitle_languages,
        }
    }
}

impl FetcherConfig {
    /// Build a fetcher configuration from the persisted fetch config
    pub fn from_fetch_config(config: &FetchConfig) -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            user_agent: config.user_agent.clone(),
            subtitle_languages: config.subtitle_languages.clone(),
        }
    }
}

/// Runs yt-dlp for a single fetch request
#[derive(Debug, Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Argument list for the primary attempt
    pub fn build_primary_args(&self, request: &FetchRequest) -> Vec<String> {
        let mut args = vec![
            "--format".to_string(),
            request.format_selector.clone(),
            "--output".to_string(),
            format!("{}/%(title)s.%(ext)s", request.output_dir),
            "--write-info-json".to_string(),
            "--write-description".to_string(),
            "--write-thumbnail".to_string(),
            "--write-auto-subs".to_string(),
            "--write-subs".to_string(),
            "--sub-langs".to_string(),
            self.config.subtitle_languages.join(","),
            "--convert-subs".to_string(),
            "srt".to_string(),
        ];

        if request.use_fallback {
            args.push("--user-agent".to_string());
            args.push(self.config.user_agent.clone());
            args.push("--extractor-args".to_string());
            args.push("youtube:player_client=web".to_string());
            args.push("--ignore-errors".to_string());
        }

        if request.embed_chapters {
            args.push("--embed-chapters".to_string());
            args.push("--embed-metadata".to_string());
        }

        args.push(request.url.clone());
        args
    }

    /// Argument list for the single fallback retry
    ///
    /// Best-quality format only, short spoofed user agent, no sidecar
    /// outputs and no chapter embedding.
    pub fn build_fallback_args(&self, request: &FetchRequest) -> Vec<String> {
        vec![
            "--format".to_string(),
            "best".to_string(),
            "--output".to_string(),
            format!("{}/%(title)s.%(ext)s", request.output_dir),
            "--user-agent".to_string(),
            FALLBACK_USER_AGENT.to_string(),
            request.url.clone(),
        ]
    }

    /// Fetch the video and its sidecars into the request's output directory
    pub async fn fetch(&self, request: &FetchRequest) -> AppResult<FetchOutcome> {
        crate::utils::fs::ensure_dir_exists(Path::new(&request.output_dir))?;

        info!("📥 Fetching: {}", request.url);

        match self.run(&self.build_primary_args(request)).await {
            Ok(()) => {
                info!("✅ Download completed successfully");
                let files = list_downloaded_files(Path::new(&request.output_dir))?;
                Ok(FetchOutcome {
                    fallback_used: false,
                    files,
                })
            }
            Err(AppError::Tool { tool, code }) if request.use_fallback => {
                warn!(
                    "🔄 {} exited with {:?}, retrying with simplified options",
                    tool, code
                );

                match self.run(&self.build_fallback_args(request)).await {
                    Ok(()) => {
                        info!("✅ Download completed with simplified options");
                        let files = list_downloaded_files(Path::new(&request.output_dir))?;
                        Ok(FetchOutcome {
                            fallback_used: true,
                            files,
                        })
                    }
                    Err(AppError::Tool { .. }) => Err(AppError::Unavailable),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// List the formats yt-dlp reports for a URL, printing to stdout
    pub async fn list_formats(&self, url: &str) -> AppResult<()> {
        self.run(&["--list-formats".to_string(), url.to_string()])
            .await
    }

    /// Run the binary with the given arguments, inheriting stdio
    async fn run(&self, args: &[String]) -> AppResult<()> {
        debug!("Running: {} {}", self.config.binary, args.join(" "));

        let status = tokio::process::Command::new(&self.config.binary)
            .args(args)
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

/// Enumerate regular files in the output directory, sorted by name
pub fn list_downloaded_files(dir: &Path) -> AppResult<Vec<DownloadedFile>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            files.push(DownloadedFile {
                name: entry.file_name().to_string_lossy().into_owned(),
                size_bytes: metadata.len(),
            });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
