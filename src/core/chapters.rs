//! Chapter extraction from yt-dlp info JSON sidecars
//!
//! yt-dlp writes chapter markers into the info JSON as a `chapters` array
//! with `start_time`, `end_time` and `title` fields. This module reads that
//! array and renders it into the ffmetadata text format ffmpeg understands.

use std::path::Path;

use tracing::debug;

use crate::core::models::{AppResult, Chapter, ChapterSidecar};

/// Header line of the ffmetadata format
pub const FFMETADATA_HEADER: &str = ";FFMETADATA1";

/// Load the chapter list from an info JSON sidecar
///
/// A sidecar without chapters yields an empty list; the caller decides
/// whether that is worth reporting.
pub fn load_chapters(sidecar_path: &Path) -> AppResult<Vec<Chapter>> {
    let content = std::fs::read_to_string(sidecar_path)?;
    let sidecar: ChapterSidecar = serde_json::from_str(&content)?;

    debug!(
        "Parsed {} chapters from {:?}",
        sidecar.chapters.len(),
        sidecar_path
    );

    Ok(sidecar.chapters)
}

/// Render chapters into ffmetadata text, in their original order
///
/// Fractional start/end times are truncated to whole seconds, matching the
/// 1/1 timebase declared per chapter block.
pub fn render_ffmetadata(chapters: &[Chapter]) -> String {
    let mut lines = vec![FFMETADATA_HEADER.to_string()];

    for chapter in chapters {
        lines.push("[CHAPTER]".to_string());
        lines.push("TIMEBASE=1/1".to_string());
        lines.push(format!("START={}", chapter.start_time as i64));
        lines.push(format!("END={}", chapter.end_time as i64));
        lines.push(format!("title={}", chapter.title));
    }

    lines.join("\n")
}
