use std::sync::Arc;

use crate::config::Config;
use crate::screening::{SimilarityRanker, TextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every screening starts from scratch.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable ranker. Default: TfIdfRanker, weighted per config.
    pub ranker: Arc<dyn SimilarityRanker>,
}
