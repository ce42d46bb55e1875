use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

/// L2-normalized sparse vector; entries sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    pub fn from_weights(weights: BTreeMap<usize, f32>) -> Self {
        Self {
            entries: weights.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// TF-IDF text vectorizer with smoothed idf and L2 normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    fingerprint: String,
}

impl TfidfVectorizer {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<BTreeSet<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()).collect())
            .collect();

        let terms: BTreeSet<&String> = tokenized.iter().flatten().collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for terms in &tokenized {
            for term in terms {
                document_frequency[vocabulary[term]] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf = document_frequency
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Self {
            vocabulary,
            idf,
            fingerprint: fingerprint(documents),
        }
    }

    pub fn transform(&self, text: &str) -> SparseVector {
        let mut weights: BTreeMap<usize, f32> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *weights.entry(index).or_insert(0.0) += 1.0;
            }
        }
        for (index, weight) in weights.iter_mut() {
            *weight *= self.idf[*index];
        }
        SparseVector::from_weights(weights).normalized()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// True when this vectorizer was fitted on exactly these documents, in this order.
    pub fn matches<S: AsRef<str>>(&self, documents: &[S]) -> bool {
        self.fingerprint == fingerprint(documents)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let bytes = bincode::serialize(self).map_err(|source| LoadError::Codec {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LoadError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, bytes).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        bincode::deserialize(&bytes).map_err(|source| LoadError::Codec {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Lowercased runs of alphanumerics/underscore, two characters or longer.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
}

fn fingerprint<S: AsRef<str>>(documents: &[S]) -> String {
    let mut context = md5::Context::new();
    for doc in documents {
        context.consume(doc.as_ref().as_bytes());
        context.consume(b"\n");
    }
    format!("{:x}", context.compute())
}
