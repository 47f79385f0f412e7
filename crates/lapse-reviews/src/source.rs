use std::path::{Path, PathBuf};

use lapse_core::config::LoaderConfig;
use lapse_core::constants::REVIEW_FILE_EXTENSION;
use lapse_core::errors::{LapseResult, LoadError};
use lapse_core::review::ReviewRecord;
use lapse_core::traits::IReviewSource;
use lapse_observability::events;
use rayon::prelude::*;

use crate::document::parse_review;

/// Review source backed by a directory of markdown files.
#[derive(Debug, Clone)]
pub struct MarkdownReviewSource {
    config: LoaderConfig,
}

impl MarkdownReviewSource {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Source over every `.md` file in `dir`, lenient loading.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(LoaderConfig {
            reviews_dir: dir.into(),
            ..LoaderConfig::default()
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Paths to load, in display order.
    pub fn review_files(&self) -> LapseResult<Vec<PathBuf>> {
        let dir = &self.config.reviews_dir;
        if !dir.is_dir() {
            return Err(LoadError::ReviewsDirMissing {
                path: dir.display().to_string(),
            }
            .into());
        }

        if !self.config.files.is_empty() {
            return Ok(self.config.files.iter().map(|f| dir.join(f)).collect());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| LoadError::Io {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                let is_review = path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext == REVIEW_FILE_EXTENSION);
                is_review.then_some(path)
            })
            .collect();
        files.sort();
        Ok(files)
    }
}

/// Read and parse one review file; its id is the file stem.
pub fn load_review(path: &Path) -> Result<ReviewRecord, LoadError> {
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_review(&id, &content)
}

impl IReviewSource for MarkdownReviewSource {
    /// Files are read and parsed in parallel. A bad file is logged and
    /// left out unless the source is strict, in which case the first bad
    /// file (in display order) fails the load.
    fn load_all(&self) -> LapseResult<Vec<ReviewRecord>> {
        let files = self.review_files()?;
        let results: Vec<(PathBuf, Result<ReviewRecord, LoadError>)> = files
            .into_par_iter()
            .map(|path| {
                let result = load_review(&path);
                (path, result)
            })
            .collect();

        let mut records = Vec::with_capacity(results.len());
        let mut skipped = 0;
        for (path, result) in results {
            match result {
                Ok(record) => {
                    events::review_loaded(&record.id, record.history.len());
                    records.push(record);
                }
                Err(e) if self.config.strict => return Err(e.into()),
                Err(e) => {
                    events::review_skipped(&path.display().to_string(), &e.to_string());
                    skipped += 1;
                }
            }
        }

        events::reviews_loaded(records.len(), skipped);
        Ok(records)
    }
}
