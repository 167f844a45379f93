//! Integration tests spanning sidecar parsing, metadata rendering, and the
//! fetch/embed orchestration paths.

#[cfg(test)]
mod tests {
    use super::super::chapters::{load_chapters, render_ffmetadata};
    use super::super::embedder::{Embedder, EmbedderConfig};
    use super::super::fetcher::{Fetcher, FetcherConfig};
    use super::super::models::{AppError, FetchRequest};
    use tempfile::tempdir;

    fn write_sidecar(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_sidecar_to_ffmetadata_pipeline() {
        let dir = tempdir().unwrap();
        let sidecar = write_sidecar(
            dir.path(),
            "movie.info.json",
            r#"{"title":"Movie","chapters":[
                {"start_time":0,"end_time":65.7,"title":"Intro"},
                {"start_time":65.7,"end_time":300.2,"title":"Main"},
                {"start_time":300.2,"end_time":360,"title":"Outro"}
            ]}"#,
        );

        let chapters = load_chapters(&sidecar).unwrap();
        let text = render_ffmetadata(&chapters);

        // Exactly one block per chapter, in sidecar order
        assert_eq!(text.matches("[CHAPTER]").count(), 3);
        assert_eq!(text.matches("TIMEBASE=1/1").count(), 3);
        assert!(text.starts_with(";FFMETADATA1\n[CHAPTER]"));
        assert!(text.contains("START=65\nEND=300\ntitle=Main"));
    }

    #[tokio::test]
    async fn test_embed_pipeline_writes_metadata_and_derives_output() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("movie.mp4");
        std::fs::write(&video, b"").unwrap();
        let sidecar = write_sidecar(
            dir.path(),
            "movie.info.json",
            r#"{"chapters":[{"start_time":0,"end_time":65.7,"title":"Intro"}]}"#,
        );

        let embedder = Embedder::new(EmbedderConfig {
            binary: "true".to_string(),
            ..EmbedderConfig::default()
        });

        let output = embedder.embed(&video, &sidecar).await.unwrap();
        assert_eq!(output.file_name().unwrap(), "movie_with_chapters.mp4");

        // Intermediate file stays behind for inspection
        let metadata = std::fs::read_to_string(dir.path().join("movie.ffmetadata")).unwrap();
        assert_eq!(
            metadata,
            ";FFMETADATA1\n[CHAPTER]\nTIMEBASE=1/1\nSTART=0\nEND=65\ntitle=Intro"
        );
    }

    #[tokio::test]
    async fn test_embed_pipeline_empty_sidecar_is_a_no_op() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("movie.mp4");
        std::fs::write(&video, b"").unwrap();
        let sidecar = write_sidecar(dir.path(), "movie.info.json", r#"{"chapters":[]}"#);

        let embedder = Embedder::new(EmbedderConfig::default());

        let result = embedder.embed(&video, &sidecar).await;
        assert!(matches!(result, Err(AppError::NoChapters)));
        assert!(!dir.path().join("movie.ffmetadata").exists());
        assert!(!dir.path().join("movie_with_chapters.mp4").exists());
    }

    #[tokio::test]
    async fn test_fetch_creates_output_directory() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("downloads");

        let fetcher = Fetcher::new(FetcherConfig {
            binary: "true".to_string(),
            ..FetcherConfig::default()
        });

        let request = FetchRequest {
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            output_dir: output_dir.to_string_lossy().into_owned(),
            format_selector: "best".to_string(),
            embed_chapters: true,
            use_fallback: true,
        };

        let outcome = fetcher.fetch(&request).await.unwrap();
        assert!(output_dir.is_dir());
        assert!(outcome.files.is_empty());
        assert!(!outcome.fallback_used);
    }
}
