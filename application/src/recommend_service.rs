use domain::models::Recommendation;
use infrastructure::dataset::RecommendationTable;
use infrastructure::error::LoadError;
use infrastructure::search::SearchEngine;
use infrastructure::vectorizer::{SparseVector, TfidfVectorizer};
use std::path::Path;
use tracing::{debug, info};

/// Nearest-row lookup over the static place table.
pub struct RecommendService {
    vectorizer: TfidfVectorizer,
    table: RecommendationTable,
    documents: Vec<SparseVector>,
}

impl RecommendService {
    pub fn load(
        vectorizer_path: impl AsRef<Path>,
        dataset_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let table = RecommendationTable::load(dataset_path)?;
        let vectorizer = TfidfVectorizer::load(vectorizer_path)?;
        Self::from_parts(vectorizer, table)
    }

    /// Fails unless the vectorizer was fitted on this table's `text` column.
    pub fn from_parts(
        vectorizer: TfidfVectorizer,
        table: RecommendationTable,
    ) -> Result<Self, LoadError> {
        let texts = table.texts();
        if !vectorizer.matches(&texts) {
            return Err(LoadError::RowMismatch { rows: table.len() });
        }
        let documents = texts.iter().map(|text| vectorizer.transform(text)).collect();
        debug!(
            rows = table.len(),
            vocabulary = vectorizer.vocabulary_len(),
            "recommendation index ready"
        );
        Ok(Self {
            vectorizer,
            table,
            documents,
        })
    }

    /// Fits a vectorizer on the dataset and writes it out. Returns the vocabulary size.
    pub fn build_index(
        dataset_path: impl AsRef<Path>,
        vectorizer_path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let table = RecommendationTable::load(dataset_path)?;
        let vectorizer = TfidfVectorizer::fit(&table.texts());
        vectorizer.save(vectorizer_path.as_ref())?;
        info!(
            rows = table.len(),
            vocabulary = vectorizer.vocabulary_len(),
            path = %vectorizer_path.as_ref().display(),
            "vectorizer written"
        );
        Ok(vectorizer.vocabulary_len())
    }

    pub fn recommend(&self, query: &str) -> Option<Recommendation> {
        let query_vector = self.vectorizer.transform(query);
        let (index, score) = SearchEngine::best_match(&query_vector, &self.documents)?;
        self.recommendation_at(index, score)
    }

    pub fn top_matches(&self, query: &str, top_k: usize) -> Vec<Recommendation> {
        let query_vector = self.vectorizer.transform(query);
        SearchEngine::rank(&query_vector, &self.documents, top_k)
            .into_iter()
            .filter_map(|(index, score)| self.recommendation_at(index, score))
            .collect()
    }

    pub fn table(&self) -> &RecommendationTable {
        &self.table
    }

    fn recommendation_at(&self, index: usize, score: f32) -> Option<Recommendation> {
        self.table.get(index).map(|row| Recommendation {
            row: row.clone(),
            score,
        })
    }
}
