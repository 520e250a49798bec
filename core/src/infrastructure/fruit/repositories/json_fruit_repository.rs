use std::path::{Path, PathBuf};

use futures::future::join_all;
use tokio::fs;
use tracing::{info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    fruit::{entities::FruitRecord, ports::FruitRepository},
};

/// Reads one fruit document per `*.json` file in a directory.
#[derive(Debug, Clone)]
pub struct JsonFruitRepository {
    data_dir: PathBuf,
}

impl JsonFruitRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn json_files(&self) -> Result<Vec<PathBuf>, CoreError> {
        let mut entries = fs::read_dir(&self.data_dir).await.map_err(|e| {
            CoreError::DataLoadError(format!(
                "cannot read fruit data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "json") {
                        files.push(path);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read an entry of {}: {}", self.data_dir.display(), e);
                    break;
                }
            }
        }

        files.sort();
        Ok(files)
    }
}

async fn read_record(path: &Path) -> Result<FruitRecord, String> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("read failed: {e}"))?;

    FruitRecord::from_json(&content).map_err(|e| format!("parse failed: {e}"))
}

impl FruitRepository for JsonFruitRepository {
    /// Records come back in file-name order. Unreadable or malformed files
    /// are skipped with a warning.
    async fn load_all(&self) -> Result<Vec<FruitRecord>, CoreError> {
        let files = self.json_files().await?;
        let results = join_all(files.iter().map(|path| read_record(path))).await;

        let records = files
            .iter()
            .zip(results)
            .filter_map(|(path, result)| match result {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(file = %path.display(), "Skipping fruit file: {}", e);
                    None
                }
            })
            .collect::<Vec<_>>();

        info!(
            directory = %self.data_dir.display(),
            files = files.len(),
            records = records.len(),
            "Loaded fruit records"
        );

        Ok(records)
    }
}
