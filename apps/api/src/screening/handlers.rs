//! Axum route handlers for the Screening API and the HTML form.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{debug, info_span};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::models::{ResumeDocument, ScreeningReport};
use crate::screening::pipeline::screen;
use crate::screening::render::render_page;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";
const UNNAMED_FILE: &str = "unnamed.pdf";

/// Decoded form submission.
#[derive(Debug, Default)]
pub struct ScreeningSubmission {
    pub job_description: String,
    pub documents: Vec<ResumeDocument>,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page("", None))
}

/// POST /screen
///
/// Form target: renders the page again with warnings and the ranked table.
pub async fn handle_screen_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let submission = read_submission(multipart).await?;
    let job_description = submission.job_description.clone();
    let report = run_screening(&state, submission).await?;
    Ok(Html(render_page(&job_description, Some(&report))))
}

/// POST /api/v1/screen
///
/// Same multipart input as the form; returns the `ScreeningReport` as JSON.
pub async fn handle_screen_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    let submission = read_submission(multipart).await?;
    let report = run_screening(&state, submission).await?;
    Ok(Json(report))
}

/// Runs the CPU-bound pipeline on the blocking pool.
async fn run_screening(
    state: &AppState,
    submission: ScreeningSubmission,
) -> Result<ScreeningReport, AppError> {
    let extractor = state.extractor.clone();
    let ranker = state.ranker.clone();
    let span = info_span!(
        "screening",
        request_id = %Uuid::new_v4(),
        files = submission.documents.len()
    );

    tokio::task::spawn_blocking(move || {
        let _guard = span.enter();
        screen(
            &submission.job_description,
            &submission.documents,
            extractor.as_ref(),
            ranker.as_ref(),
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in screening: {e}")))
}

/// Reads the job description and every uploaded résumé, in upload order.
pub async fn read_submission(mut multipart: Multipart) -> Result<ScreeningSubmission, AppError> {
    let mut submission = ScreeningSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_FIELD => {
                submission.job_description = field.text().await.map_err(multipart_error)?;
            }
            RESUMES_FIELD => {
                let filename = field
                    .file_name()
                    .filter(|f| !f.is_empty())
                    .map(str::to_string);
                let content = field.bytes().await.map_err(multipart_error)?;
                match filename {
                    Some(filename) => submission
                        .documents
                        .push(ResumeDocument::new(filename, content)),
                    // Browsers send one empty, nameless part when no file was picked.
                    None if content.is_empty() => continue,
                    None => submission
                        .documents
                        .push(ResumeDocument::new(UNNAMED_FILE, content)),
                }
            }
            other => debug!(field = other, "ignoring unknown multipart field"),
        }
    }

    Ok(submission)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("invalid multipart submission: {}", e.body_text()))
    }
}
