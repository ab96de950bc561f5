//! Integration tests for multipart upload handling.
//!
//! Drives `collect_submission` through a real actix service so the multipart
//! parsing, content-type filtering, and size enforcement are exercised
//! end-to-end against a temporary upload directory.

use std::path::PathBuf;

use actix_multipart::Multipart;
use actix_web::{test, web, App, HttpResponse};

use application_portal::error::AppError;
use application_portal::services::upload::{self, MAX_RESUME_SIZE};

/// Build a multipart body: (name, optional (filename, content type), data).
fn multipart_body(parts: &[(&str, Option<(&str, &str)>, &[u8])]) -> (String, Vec<u8>) {
    let boundary = "test-boundary-7MA4YWxkTrZu0gW";
    let mut body = Vec::new();

    for (name, file, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match file {
            Some((filename, content_type)) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                     Content-Type: {}\r\n\r\n",
                    name, filename, content_type
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    (boundary.to_string(), body)
}

async fn collect(
    mut payload: Multipart,
    upload_dir: web::Data<PathBuf>,
) -> Result<HttpResponse, AppError> {
    let parts = upload::collect_submission(&mut payload, upload_dir.get_ref()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "fields": parts.fields,
        "resume": parts.resume.map(|r| r.filename),
    })))
}

async fn send(
    upload_dir: PathBuf,
    parts: &[(&str, Option<(&str, &str)>, &[u8])],
) -> (u16, serde_json::Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(upload_dir))
            .route("/collect", web::post().to(collect)),
    )
    .await;

    let (boundary, body) = multipart_body(parts);
    let req = test::TestRequest::post()
        .uri("/collect")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        ))
        .set_payload(body)
        .to_request();

    let res = test::call_service(&app, req).await;
    let status = res.status().as_u16();
    let json: serde_json::Value = test::read_body_json(res).await;
    (status, json)
}

fn stored_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[actix_web::test]
async fn test_text_fields_and_pdf_resume_accepted() {
    let dir = tempfile::tempdir().unwrap();

    let (status, json) = send(
        dir.path().to_path_buf(),
        &[
            ("email", None, b"jane@example.com"),
            ("fullName", None, b"Jane Doe"),
            (
                "resume",
                Some(("My Resume (final).PDF", "application/pdf")),
                b"%PDF-1.7 fake",
            ),
        ],
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(json["fields"]["email"], "jane@example.com");
    assert_eq!(json["fields"]["fullName"], "Jane Doe");

    let stored = json["resume"].as_str().unwrap();
    assert!(stored.ends_with("-My-Resume-final.pdf"), "got {}", stored);

    let files = stored_files(dir.path());
    assert_eq!(files, vec![stored.to_string()]);
    let content = std::fs::read(dir.path().join(stored)).unwrap();
    assert_eq!(content, b"%PDF-1.7 fake");
}

#[actix_web::test]
async fn test_png_resume_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let (status, json) = send(
        dir.path().to_path_buf(),
        &[(
            "resume",
            Some(("photo.png", "image/png")),
            b"\x89PNG fake" as &[u8],
        )],
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(json["message"], "Invalid file type. Allowed: pdf, doc, docx, txt");
    assert!(stored_files(dir.path()).is_empty());
}

#[actix_web::test]
async fn test_oversized_resume_rejected_and_partial_removed() {
    let dir = tempfile::tempdir().unwrap();
    let data = vec![b'a'; MAX_RESUME_SIZE + 1];

    let (status, json) = send(
        dir.path().to_path_buf(),
        &[("resume", Some(("resume.pdf", "application/pdf")), &data)],
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(json["message"], "Resume file exceeds 10MB limit");
    assert!(stored_files(dir.path()).is_empty());
}

#[actix_web::test]
async fn test_resume_at_cap_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let data = vec![b'a'; MAX_RESUME_SIZE];

    let (status, json) = send(
        dir.path().to_path_buf(),
        &[("resume", Some(("resume.pdf", "application/pdf")), &data)],
    )
    .await;

    assert_eq!(status, 200);
    assert!(json["resume"].is_string());
    assert_eq!(stored_files(dir.path()).len(), 1);
}

#[actix_web::test]
async fn test_empty_filename_means_no_attachment() {
    let dir = tempfile::tempdir().unwrap();

    let (status, json) = send(
        dir.path().to_path_buf(),
        &[
            ("email", None, b"jane@example.com"),
            ("resume", Some(("", "application/octet-stream")), b""),
        ],
    )
    .await;

    assert_eq!(status, 200);
    assert!(json["resume"].is_null());
    assert!(stored_files(dir.path()).is_empty());
}

#[actix_web::test]
async fn test_unexpected_file_field_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let (status, json) = send(
        dir.path().to_path_buf(),
        &[(
            "avatar",
            Some(("avatar.pdf", "application/pdf")),
            b"%PDF fake" as &[u8],
        )],
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(json["message"], "Unexpected file field: avatar");
    assert!(stored_files(dir.path()).is_empty());
}
