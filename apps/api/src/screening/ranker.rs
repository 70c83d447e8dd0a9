//! Similarity ranker: scores candidate texts against a query text.
//!
//! Default: `TfIdfRanker` (lexical, deterministic, no external corpus).
//! `AppState` holds an `Arc<dyn SimilarityRanker>`, built at startup from config.

use tracing::debug;

use crate::errors::RankingError;
use crate::screening::vectorizer::{TfidfParams, TfidfVectorizer};

/// Scores every candidate against `query`. Output has one score per candidate,
/// in candidate order. Callers must pass at least one candidate.
pub trait SimilarityRanker: Send + Sync {
    fn rank(&self, query: &str, candidates: &[&str]) -> Result<Vec<f64>, RankingError>;
}

/// Fits TF-IDF over the query plus all candidates as one corpus, then compares
/// each candidate vector with the query vector by cosine similarity.
///
/// IDF therefore depends on the whole candidate set: adding or removing a
/// résumé can move the scores of the others.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfRanker {
    params: TfidfParams,
}

impl TfIdfRanker {
    pub fn new(params: TfidfParams) -> Self {
        Self { params }
    }
}

impl SimilarityRanker for TfIdfRanker {
    fn rank(&self, query: &str, candidates: &[&str]) -> Result<Vec<f64>, RankingError> {
        if candidates.is_empty() {
            return Err(RankingError::NoCandidates);
        }

        let mut corpus = Vec::with_capacity(candidates.len() + 1);
        corpus.push(query);
        corpus.extend_from_slice(candidates);

        let matrix = TfidfVectorizer::new(self.params).fit_transform(&corpus)?;
        debug!(
            terms = matrix.vocabulary.len(),
            candidates = candidates.len(),
            "fitted joint TF-IDF space"
        );
        let (query_vec, candidate_vecs) = matrix
            .rows
            .split_first()
            .ok_or(RankingError::EmptyVocabulary)?;

        Ok(candidate_vecs
            .iter()
            .map(|row| cosine_similarity(query_vec, row))
            .collect())
    }
}

/// Cosine of the angle between `a` and `b`. A zero vector on either side scores
/// 0.0. The result is clamped to [-1, 1] to absorb rounding.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}
