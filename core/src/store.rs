use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::index::Article;

/// Corpus storage: one file holding a JSON array of articles. The store does
/// not fetch, validate beyond deserialization, or persist anything back.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Article>> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading corpus file {}", self.path.display()))?;
        let articles: Vec<Article> = serde_json::from_str(&data)
            .with_context(|| format!("parsing corpus file {}", self.path.display()))?;
        Ok(articles)
    }
}
