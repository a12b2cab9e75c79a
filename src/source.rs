// src/source.rs
//! Where tab snapshots come from.
//!
//! The browser is an external collaborator: it hands the pipeline a JSON
//! snapshot of one window's tabs. `TabSource` is the seam; the file/stdin
//! reader is the one implementation this tool ships.

use crate::config::SnapshotInput;
use crate::error::AppError;
use crate::model::{TabSnapshot, WindowSnapshot};
use tokio::io::AsyncReadExt;

/// Retrieves the tab list of the current window.
#[async_trait::async_trait]
pub trait TabSource {
    async fn query(&self) -> Result<Vec<TabSnapshot>, AppError>;
}

/// Reads a window snapshot from a JSON file or standard input.
#[derive(Debug, Clone)]
pub struct SnapshotFileSource {
    input: SnapshotInput,
}

impl SnapshotFileSource {
    pub fn new(input: SnapshotInput) -> Self {
        Self { input }
    }

    async fn read_raw(&self) -> Result<(String, String), AppError> {
        match &self.input {
            SnapshotInput::File(path) => {
                let raw = tokio::fs::read_to_string(path).await.map_err(|source| {
                    AppError::SnapshotRead {
                        path: path.display().to_string(),
                        source,
                    }
                })?;
                Ok((raw, path.display().to_string()))
            }
            SnapshotInput::Stdin => {
                let mut raw = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut raw)
                    .await
                    .map_err(|source| AppError::SnapshotRead {
                        path: "<stdin>".to_string(),
                        source,
                    })?;
                Ok((raw, "<stdin>".to_string()))
            }
        }
    }
}

#[async_trait::async_trait]
impl TabSource for SnapshotFileSource {
    async fn query(&self) -> Result<Vec<TabSnapshot>, AppError> {
        let (raw, origin) = self.read_raw().await?;

        let snapshot: WindowSnapshot =
            serde_json::from_str(&raw).map_err(|source| AppError::SnapshotParse {
                path: origin.clone(),
                source,
            })?;

        let tabs = snapshot.into_tabs();
        log::info!("Read {} tabs from {}", tabs.len(), origin);
        Ok(tabs)
    }
}

/// Parses a snapshot already held in memory. Used by tests and embedders.
#[allow(dead_code)] // Used by library consumers
pub fn parse_snapshot(raw: &str) -> Result<Vec<TabSnapshot>, AppError> {
    let snapshot: WindowSnapshot =
        serde_json::from_str(raw).map_err(|source| AppError::SnapshotParse {
            path: "<memory>".to_string(),
            source,
        })?;
    Ok(snapshot.into_tabs())
}
