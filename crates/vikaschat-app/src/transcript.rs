use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct TranscriptEntry {
    timestamp: String, // ISO-8601 UTC
    role: String,
    content: String,
}

/// Append-only JSONL transcript of proxied exchanges, one file per server
/// start under `logs/`. Write failures are reported but never interrupt a
/// chat exchange.
pub struct TranscriptLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl TranscriptLogger {
    /// Create a new logger; generates the file name based on the current UTC time.
    pub async fn new(workspace: &Path) -> Result<Self> {
        let logs_dir = workspace.join("logs");
        fs::create_dir_all(&logs_dir).await?;

        let now: DateTime<Utc> = Utc::now();
        let filename = format!("chat-{}.jsonl", now.format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self {
            file_path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single entry.
    pub async fn log(&mut self, role: &str, content: &str) {
        let entry = TranscriptEntry {
            timestamp: Utc::now().to_rfc3339(),
            role: role.to_string(),
            content: content.to_string(),
        };
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(&entry) {
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Transcript error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Transcript error] {}", e);
                } else if let Err(e) = file.flush().await {
                    eprintln!("[Transcript error] {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_log_appends_one_json_line_per_entry() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = TranscriptLogger::new(temp_dir.path()).await.unwrap();

        logger.log("user", "Namaste").await;
        logger.log("assistant", "Namaste ji!").await;

        let content = std::fs::read_to_string(logger.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["role"], "user");
        assert_eq!(first["content"], "Namaste");
        assert!(first["timestamp"].as_str().is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["role"], "assistant");
    }
}
