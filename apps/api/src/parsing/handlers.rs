use std::io::Write;
use std::path::Path;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::ParseResult;
use crate::parsing::ResumeParser;
use crate::state::AppState;

/// Multipart field carrying the resume.
pub const UPLOAD_FIELD: &str = "file";

struct PdfUpload {
    file_name: String,
    bytes: Vec<u8>,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResult>, AppError> {
    let upload = read_pdf_upload(&mut multipart).await?;

    info!(
        "Parsing upload '{}' ({} bytes)",
        upload.file_name,
        upload.bytes.len()
    );

    // Temp file I/O and extraction are blocking; both run off the async executor.
    let parser = state.parser.clone();
    tokio::task::spawn_blocking(move || {
        persist_and_parse(&parser, &upload.bytes, &std::env::temp_dir())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in resume parse: {e}")))?
    .map(Json)
}

/// Writes the upload to a temp file under `dir`, parses it, and removes the file.
///
/// The temp file is removed on every path, including parse failures.
fn persist_and_parse(
    parser: &ResumeParser,
    bytes: &[u8],
    dir: &Path,
) -> Result<ParseResult, AppError> {
    let mut temp = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile_in(dir)
        .context("Failed to create temp file for upload")?;
    temp.write_all(bytes)
        .and_then(|_| temp.flush())
        .context("Failed to persist upload to temp file")?;

    let outcome = parser.parse_file(temp.path());
    if let Err(e) = temp.close() {
        warn!("Failed to remove upload temp file: {e}");
    }
    Ok(outcome?)
}

async fn read_pdf_upload(multipart: &mut Multipart) -> Result<PdfUpload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Upload is missing a filename".to_string()))?;
        if !has_pdf_extension(&file_name) {
            return Err(AppError::Validation(format!(
                "Only .pdf files are supported, got '{file_name}'"
            )));
        }

        let bytes = field.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok(PdfUpload { file_name, bytes });
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}

fn has_pdf_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
