use crate::domain::ports::LineSource;
use crate::utils::error::{Result, SolverError};

/// Reads cipher lines from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLines;

impl LocalLines {
    pub fn new() -> Self {
        Self
    }
}

/// Splits on `\n`, drops one trailing `\r` per line and replaces invalid
/// UTF-8 instead of rejecting the file.
pub fn split_lines(content: &[u8]) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    // 結尾的換行不產生額外的空行
    let content = content.strip_suffix(b"\n").unwrap_or(content);

    content
        .split(|byte| *byte == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}

impl LineSource for LocalLines {
    async fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        let content = tokio::fs::read(path)
            .await
            .map_err(|source| SolverError::UnreadableInput {
                path: path.to_string(),
                source,
            })?;

        let lines = split_lines(&content);
        if std::str::from_utf8(&content).is_err() {
            tracing::warn!("⚠️ {} contains invalid UTF-8; bad bytes were replaced", path);
        }
        Ok(lines)
    }
}
