//! Screening pipeline: extract every upload, rank the survivors, sort.
//!
//! Partial failure is per file. An unreadable or empty résumé becomes an
//! `ExtractionOutcome::Excluded` plus a warning; the rest are still ranked.

use tracing::{info, warn};

use crate::screening::extractor::TextExtractor;
use crate::screening::models::{
    ExclusionReason, ExtractionOutcome, NoticeLevel, ResumeDocument, ScoreEntry, ScreeningReport,
    ScreeningStatus,
};
use crate::screening::ranker::SimilarityRanker;

pub const AWAITING_INPUT_MESSAGE: &str =
    "Please enter a job description and upload at least one resume to start.";
pub const NO_VALID_CANDIDATES_MESSAGE: &str =
    "No valid resumes found. Please check the uploaded files.";

/// Runs the extractor over every document, preserving upload order.
pub fn extract_all(
    extractor: &dyn TextExtractor,
    documents: &[ResumeDocument],
) -> Vec<ExtractionOutcome> {
    documents
        .iter()
        .map(|doc| {
            let filename = doc.filename.clone();
            match extractor.extract(&doc.content) {
                Ok(Some(text)) => ExtractionOutcome::Extracted { filename, text },
                Ok(None) => ExtractionOutcome::Excluded {
                    filename,
                    reason: ExclusionReason::NoText,
                },
                Err(e) => ExtractionOutcome::Excluded {
                    filename,
                    reason: ExclusionReason::Unreadable(e.reason),
                },
            }
        })
        .collect()
}

/// Full request: job description plus uploads in, display-ready report out.
pub fn screen(
    job_description: &str,
    documents: &[ResumeDocument],
    extractor: &dyn TextExtractor,
    ranker: &dyn SimilarityRanker,
) -> ScreeningReport {
    if job_description.trim().is_empty() || documents.is_empty() {
        return ScreeningReport::new(ScreeningStatus::AwaitingInput)
            .with_notice(NoticeLevel::Info, AWAITING_INPUT_MESSAGE);
    }

    let outcomes = extract_all(extractor, documents);

    let mut warnings = Vec::new();
    let mut filenames = Vec::new();
    let mut texts = Vec::new();
    for outcome in outcomes {
        if let Some(warning) = outcome.warning() {
            warn!(file = outcome.filename(), "{warning}");
            warnings.push(warning);
        }
        if let ExtractionOutcome::Extracted { filename, text } = outcome {
            filenames.push(filename);
            texts.push(text);
        }
    }

    if texts.is_empty() {
        let mut report = ScreeningReport::new(ScreeningStatus::NoValidCandidates)
            .with_notice(NoticeLevel::Warning, NO_VALID_CANDIDATES_MESSAGE);
        report.warnings = warnings;
        return report;
    }

    let candidates: Vec<&str> = texts.iter().map(String::as_str).collect();
    let scores = match ranker.rank(job_description, &candidates) {
        Ok(scores) => scores,
        Err(e) => {
            warn!("ranking failed: {e}");
            let mut report = ScreeningReport::new(ScreeningStatus::RankingFailed)
                .with_notice(NoticeLevel::Warning, format!("Could not rank resumes: {e}."));
            report.warnings = warnings;
            return report;
        }
    };

    // Positional zip: scores[i] belongs to the i-th retained file.
    let mut results: Vec<ScoreEntry> = filenames
        .into_iter()
        .zip(scores)
        .map(|(filename, score)| ScoreEntry { filename, score })
        .collect();
    // Vec::sort_by is stable, so tied scores keep upload order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    info!(
        ranked = results.len(),
        excluded = warnings.len(),
        "screening complete"
    );

    let mut report = ScreeningReport::new(ScreeningStatus::Ranked);
    report.results = results;
    report.warnings = warnings;
    report
}
