//! HTML form host: the upload form and, after a submission, the ranked table.

use std::fmt::Write;

use crate::screening::models::{NoticeLevel, ScreeningReport};

const PAGE_TITLE: &str = "AI Resume Screening &amp; Candidate Ranking System";

const STYLE: &str = "body{font-family:sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;min-height:10rem}\
table{border-collapse:collapse;margin-top:1rem}\
td,th{border:1px solid #ccc;padding:.3rem .8rem;text-align:left}\
.info{background:#e8f0fe;padding:.6rem}\
.warning{background:#fff4e5;padding:.6rem;margin:.3rem 0}";

/// Renders the full page. `job_description` refills the textarea after a submit.
pub fn render_page(job_description: &str, report: Option<&ScreeningReport>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    let _ = write!(html, "<title>{PAGE_TITLE}</title><style>{STYLE}</style>");
    html.push_str("</head><body>");
    let _ = write!(html, "<h1>{PAGE_TITLE}</h1>");

    html.push_str("<form method=\"post\" action=\"/screen\" enctype=\"multipart/form-data\">");
    html.push_str("<h2>Job Description</h2>");
    let _ = write!(
        html,
        "<label for=\"job_description\">Enter the job description</label>\
         <textarea id=\"job_description\" name=\"job_description\">{}</textarea>",
        escape_html(job_description)
    );
    html.push_str("<h2>Upload Resumes</h2>");
    html.push_str(
        "<input type=\"file\" name=\"resumes\" accept=\"application/pdf,.pdf\" multiple>",
    );
    html.push_str("<p><button type=\"submit\">Rank resumes</button></p></form>");

    if let Some(report) = report {
        render_report(&mut html, report);
    }

    html.push_str("</body></html>");
    html
}

fn render_report(html: &mut String, report: &ScreeningReport) {
    for warning in &report.warnings {
        let _ = write!(html, "<div class=\"warning\">{}</div>", escape_html(warning));
    }

    if !report.results.is_empty() {
        html.push_str("<h2>Ranking Resumes</h2>");
        html.push_str("<table><thead><tr><th>Resume</th><th>Score</th></tr></thead><tbody>");
        for entry in &report.results {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{:.4}</td></tr>",
                escape_html(&entry.filename),
                entry.score
            );
        }
        html.push_str("</tbody></table>");
    }

    if let Some(notice) = &report.notice {
        let class = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
        };
        let _ = write!(
            html,
            "<div class=\"{class}\">{}</div>",
            escape_html(&notice.message)
        );
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
