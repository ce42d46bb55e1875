use crate::vectorizer::SparseVector;

pub struct SearchEngine;

impl SearchEngine {
    /// Zero when either side has no weight.
    pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
        let norm_a = a.norm();
        let norm_b = b.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        a.dot(b) / (norm_a * norm_b)
    }

    /// Index and score of the closest document. Ties go to the lowest index.
    pub fn best_match(query: &SparseVector, documents: &[SparseVector]) -> Option<(usize, f32)> {
        documents
            .iter()
            .map(|doc| Self::cosine_similarity(query, doc))
            .enumerate()
            .fold(None, |best, (index, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((index, score)),
            })
    }

    /// Top `top_k` documents by descending score, ties by index.
    pub fn rank(query: &SparseVector, documents: &[SparseVector], top_k: usize) -> Vec<(usize, f32)> {
        let mut similarities: Vec<(usize, f32)> = documents
            .iter()
            .enumerate()
            .map(|(index, doc)| (index, Self::cosine_similarity(query, doc)))
            .collect();

        similarities.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        similarities.truncate(top_k);
        similarities
    }
}
