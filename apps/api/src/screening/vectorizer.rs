//! TF-IDF vector space fitted jointly over one batch of documents.
//!
//! The vocabulary is rebuilt on every call and is sorted lexicographically, so
//! identical input always produces bit-identical vectors. Vectors from two
//! different calls live in different spaces and must not be compared.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::RankingError;
use crate::screening::tokenizer::tokenize;

/// Weighting knobs. Defaults match the classic scheme: lowercase terms, raw
/// counts, smoothed IDF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TfidfParams {
    pub lowercase: bool,
    /// Adds one to document frequencies as if an extra document held every term.
    pub smooth_idf: bool,
    /// Replaces raw term counts with `1 + ln(count)`.
    pub sublinear_tf: bool,
}

impl Default for TfidfParams {
    fn default() -> Self {
        Self {
            lowercase: true,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

/// Row-per-document matrix of L2-normalized TF-IDF weights.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer {
    params: TfidfParams,
}

impl TfidfVectorizer {
    pub fn new(params: TfidfParams) -> Self {
        Self { params }
    }

    pub fn fit_transform(&self, documents: &[&str]) -> Result<TermMatrix, RankingError> {
        let counts: Vec<BTreeMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for term in tokenize(doc, self.params.lowercase) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let vocabulary: Vec<String> = counts
            .iter()
            .flat_map(|tf| tf.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if vocabulary.is_empty() {
            return Err(RankingError::EmptyVocabulary);
        }

        let index: BTreeMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let mut document_frequency = vec![0u32; vocabulary.len()];
        for tf in &counts {
            for term in tf.keys() {
                document_frequency[index[term.as_str()]] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| inverse_document_frequency(n, df as f64, self.params.smooth_idf))
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let mut row = vec![0.0; vocabulary.len()];
                for (term, &count) in tf {
                    let col = index[term.as_str()];
                    row[col] = self.term_weight(count) * idf[col];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(TermMatrix {
            vocabulary,
            idf,
            rows,
        })
    }

    fn term_weight(&self, count: u32) -> f64 {
        if self.params.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }
}

fn inverse_document_frequency(n: f64, df: f64, smooth: bool) -> f64 {
    if smooth {
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    } else {
        (n / df).ln() + 1.0
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}
