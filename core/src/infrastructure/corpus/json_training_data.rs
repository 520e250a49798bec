use std::path::PathBuf;

use tokio::fs;

use crate::domain::{
    chatbot::{corpus::TrainingData, ports::TrainingDataRepository},
    common::entities::app_errors::CoreError,
};

/// Training data stored as a single JSON file. The file is only ever read.
#[derive(Debug, Clone)]
pub struct JsonTrainingDataRepository {
    path: PathBuf,
}

impl JsonTrainingDataRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrainingDataRepository for JsonTrainingDataRepository {
    async fn load(&self) -> Result<TrainingData, CoreError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::DataLoadError(format!(
                "cannot read training data {}: {}",
                self.path.display(),
                e
            ))
        })?;

        TrainingData::from_json(&content)
    }
}
