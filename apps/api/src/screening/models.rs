use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded résumé: original filename plus raw payload. Never mutated after upload.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub filename: String,
    pub content: Bytes,
}

impl ResumeDocument {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Why a document was left out of ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum ExclusionReason {
    /// Parsed fine, but no page produced any text.
    NoText,
    /// The payload could not be parsed as a document.
    Unreadable(String),
}

/// Per-file extraction result, collected before the batch ranking step.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Extracted {
        filename: String,
        text: String,
    },
    Excluded {
        filename: String,
        reason: ExclusionReason,
    },
}

impl ExtractionOutcome {
    pub fn filename(&self) -> &str {
        match self {
            ExtractionOutcome::Extracted { filename, .. }
            | ExtractionOutcome::Excluded { filename, .. } => filename,
        }
    }

    /// User-facing warning for an excluded file; `None` for extracted ones.
    ///
    /// Both exclusion reasons read the same to the user; the parser detail is
    /// appended only so the offending file can be diagnosed.
    pub fn warning(&self) -> Option<String> {
        match self {
            ExtractionOutcome::Extracted { .. } => None,
            ExtractionOutcome::Excluded { filename, reason } => {
                let base = format!("No readable text found in {filename}. Skipping this file.");
                Some(match reason {
                    ExclusionReason::NoText => base,
                    ExclusionReason::Unreadable(detail) => format!("{base} ({detail})"),
                })
            }
        }
    }
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub filename: String,
    pub score: f64,
}

/// Overall state of a screening request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningStatus {
    /// Job description or résumé uploads missing; nothing was processed.
    AwaitingInput,
    Ranked,
    NoValidCandidates,
    RankingFailed,
}

/// Severity of the single top-level message shown above the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Everything the form host needs to display after one submission.
///
/// `results` is sorted by score descending, ties kept in upload order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub status: ScreeningStatus,
    pub results: Vec<ScoreEntry>,
    pub warnings: Vec<String>,
    pub notice: Option<Notice>,
    pub ranked_at: DateTime<Utc>,
}

impl ScreeningReport {
    pub fn new(status: ScreeningStatus) -> Self {
        Self {
            status,
            results: Vec::new(),
            warnings: Vec::new(),
            notice: None,
            ranked_at: Utc::now(),
        }
    }

    pub fn with_notice(mut self, level: NoticeLevel, message: impl Into<String>) -> Self {
        self.notice = Some(Notice {
            level,
            message: message.into(),
        });
        self
    }
}
