//! Resume upload handling for application submissions.
//!
//! Consumes the multipart form stream: text parts accumulate into a field
//! map, the single optional `resume` part is validated and streamed to the
//! upload directory under a unique filename.

use std::collections::HashMap;
use std::path::Path;

use actix_multipart::{Field, Multipart};
use chrono::Utc;
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Maximum accepted resume size in bytes.
pub const MAX_RESUME_SIZE: usize = 10 * 1024 * 1024;

/// Maximum accepted size of a single text field in bytes.
pub const MAX_TEXT_FIELD_SIZE: usize = 1024 * 1024;

/// Multipart field name carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

/// Content types accepted for the resume file.
pub const ALLOWED_RESUME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// A resume persisted to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResume {
    /// Stored filename (unique, relative to the upload directory).
    pub filename: String,
    /// File size in bytes.
    pub size: usize,
}

/// The decomposed multipart submission: text fields plus the stored resume.
#[derive(Debug, Default)]
pub struct SubmissionParts {
    pub fields: HashMap<String, String>,
    pub resume: Option<StoredResume>,
}

/// Consume the multipart stream of one submission.
///
/// Text parts are collected into the field map (last value wins for a
/// repeated name). The file part must be named `resume`; its content type
/// must be allow-listed and its size at most [`MAX_RESUME_SIZE`]. A file
/// part with an empty filename is treated as no attachment. Any violation
/// rejects the whole submission and leaves no partial file behind.
pub async fn collect_submission(
    payload: &mut Multipart,
    upload_dir: &Path,
) -> AppResult<SubmissionParts> {
    let mut parts = SubmissionParts::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let (name, filename) = {
            let cd = field
                .content_disposition()
                .ok_or_else(|| AppError::InvalidInput("Missing content disposition".to_string()))?;
            (
                cd.get_name().map(str::to_owned),
                cd.get_filename().map(str::to_owned),
            )
        };

        let name = match name {
            Some(name) => name,
            None => continue,
        };

        match filename {
            Some(original) if original.is_empty() => {
                // Empty file part from a blank file picker.
                drain_field(&mut field).await;
            }
            Some(original) => {
                if name != RESUME_FIELD {
                    return Err(AppError::InvalidInput(format!(
                        "Unexpected file field: {}",
                        name
                    )));
                }
                if parts.resume.is_some() {
                    return Err(AppError::InvalidInput(
                        "Only one resume file may be attached".to_string(),
                    ));
                }

                let content_type = field
                    .content_type()
                    .map(|m| m.essence_str().to_owned())
                    .unwrap_or_default();
                if !ALLOWED_RESUME_TYPES.contains(&content_type.as_str()) {
                    return Err(AppError::InvalidInput(
                        "Invalid file type. Allowed: pdf, doc, docx, txt".to_string(),
                    ));
                }

                parts.resume = Some(store_resume(&mut field, &original, upload_dir).await?);
            }
            None => {
                let value = read_text_field(&mut field, &name).await?;
                parts.fields.insert(name, value);
            }
        }
    }

    Ok(parts)
}

/// Stream one file field to the upload directory, enforcing the size cap.
async fn store_resume(
    field: &mut Field,
    original_name: &str,
    upload_dir: &Path,
) -> AppResult<StoredResume> {
    let filename = unique_filename(original_name, Utc::now().timestamp_millis());
    let path = upload_dir.join(&filename);

    let mut file = tokio::fs::File::create(&path).await.map_err(|e| {
        AppError::FileSystem(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut size: usize = 0;
    while let Some(chunk) = field.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(&path).await;
                return Err(AppError::InvalidInput(format!("Multipart error: {}", e)));
            }
        };

        size += chunk.len();
        if size > MAX_RESUME_SIZE {
            drop(file);
            let _ = tokio::fs::remove_file(&path).await;
            return Err(AppError::InvalidInput(
                "Resume file exceeds 10MB limit".to_string(),
            ));
        }

        if let Err(e) = file.write_all(&chunk).await {
            drop(file);
            let _ = tokio::fs::remove_file(&path).await;
            return Err(AppError::FileSystem(format!(
                "Failed to write {}: {}",
                path.display(),
                e
            )));
        }
    }

    file.flush().await.map_err(|e| {
        AppError::FileSystem(format!("Failed to flush {}: {}", path.display(), e))
    })?;

    info!("Stored resume {} ({} bytes)", filename, size);

    Ok(StoredResume { filename, size })
}

/// Read one text field into a string, enforcing the per-field size cap.
async fn read_text_field(field: &mut Field, name: &str) -> AppResult<String> {
    let mut buf: Vec<u8> = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;
        if buf.len() + chunk.len() > MAX_TEXT_FIELD_SIZE {
            return Err(AppError::InvalidInput(format!(
                "Field {} exceeds the maximum field size",
                name
            )));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Drain a multipart field without saving.
async fn drain_field(field: &mut Field) {
    while let Some(chunk) = field.next().await {
        let _ = chunk;
    }
}

/// Build the stored filename: `<millis>-<sanitized-stem><ext>`, with the
/// original extension lower-cased.
pub fn unique_filename(original: &str, timestamp_ms: i64) -> String {
    let path = Path::new(original);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");

    format!("{}-{}{}", timestamp_ms, sanitize_file_stem(stem), ext)
}

/// Sanitize a filename stem: keep `[A-Za-z0-9_-]`, collapse every other run
/// to a single `-`, trim leading/trailing `-`, fall back to `file` when
/// nothing remains.
fn sanitize_file_stem(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut in_run = false;

    for c in stem.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}
