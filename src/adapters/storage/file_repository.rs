//! File-based Analysis Repository
//!
//! Stores each analysis as a JSON file on disk, named by its id. Durable
//! single-user storage without a database.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::AnalysisId;
use crate::domain::matrix::Analysis;
use crate::ports::{AnalysisRepository, RepositoryError};

/// File-based repository for ACH analyses.
#[derive(Debug, Clone)]
pub struct FileAnalysisRepository {
    base_path: PathBuf,
}

impl FileAnalysisRepository {
    /// Create a new file repository rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn analysis_file_path(&self, id: AnalysisId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    async fn ensure_base_dir(&self) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }
}

#[async_trait]
impl AnalysisRepository for FileAnalysisRepository {
    async fn save(&self, analysis: &Analysis) -> Result<(), RepositoryError> {
        self.ensure_base_dir().await?;
        let json = serde_json::to_string_pretty(analysis)?;
        fs::write(self.analysis_file_path(analysis.id), json).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: AnalysisId) -> Result<Analysis, RepositoryError> {
        let path = self.analysis_file_path(id);
        if !path.exists() {
            return Err(RepositoryError::NotFound(id));
        }
        let json = fs::read_to_string(&path).await?;
        let analysis = serde_json::from_str(&json)?;
        Ok(analysis)
    }

    async fn list(&self) -> Result<Vec<Analysis>, RepositoryError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut analyses = Vec::new();
        let mut entries = fs::read_dir(&self.base_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let json = fs::read_to_string(&path).await?;
            analyses.push(serde_json::from_str(&json)?);
        }

        analyses.sort_by_key(|a: &Analysis| a.created_at);
        Ok(analyses)
    }

    async fn delete(&self, id: AnalysisId) -> Result<(), RepositoryError> {
        let path = self.analysis_file_path(id);
        if !path.exists() {
            return Err(RepositoryError::NotFound(id));
        }
        fs::remove_file(path).await?;
        Ok(())
    }
}
