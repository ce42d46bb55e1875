use crate::error::LoadError;
use domain::models::RecommendationRow;
use std::fs::File;
use std::path::Path;

/// Static place table backing the similarity lookup. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    rows: Vec<RecommendationRow>,
}

impl RecommendationTable {
    /// Reads a CSV file with the header `text,name,category,city`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
        let rows = reader
            .deserialize::<RecommendationRow>()
            .collect::<Result<Vec<_>, csv::Error>>()
            .map_err(|source| LoadError::Dataset {
                path: path.to_path_buf(),
                source,
            })?;

        if rows.is_empty() {
            return Err(LoadError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { rows })
    }

    pub fn from_rows(rows: Vec<RecommendationRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RecommendationRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&RecommendationRow> {
        self.rows.get(index)
    }

    /// The `text` column in row order; this is what the vectorizer is fitted on.
    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
