// Résumé screening: PDF text extraction, TF-IDF ranking, and the form host around them.
// Extraction and ranking are synchronous and CPU-bound; handlers run them inside
// tokio::task::spawn_blocking.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod ranker;
pub mod render;
pub mod tokenizer;
pub mod vectorizer;

#[cfg(test)]
pub mod test_fixtures;

// Re-export the public API consumed by startup and state wiring.
pub use extractor::{PdfTextExtractor, TextExtractor};
pub use ranker::{SimilarityRanker, TfIdfRanker};
pub use vectorizer::TfidfParams;
