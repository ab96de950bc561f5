//! Application submission endpoint.

use std::path::PathBuf;

use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::db;
use crate::error::AppResult;
use crate::services::{submission, upload};

/// Successful submission response.
#[derive(Serialize, ToSchema)]
pub struct SubmitResponse {
    message: &'static str,
}

/// Accept one application submission.
///
/// Consumes the multipart form (text fields plus the optional `resume`
/// file), runs the validation pipeline, and inserts the canonical record.
/// Validation rejections are 400s naming the reason; a store failure after
/// validation is a generic 500.
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "Applications",
    responses(
        (status = 201, description = "Application stored", body = SubmitResponse),
        (status = 400, description = "Submission rejected", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
#[post("/applications")]
pub async fn submit_application(
    mut payload: Multipart,
    pool: web::Data<DatabaseConnection>,
    upload_dir: web::Data<PathBuf>,
) -> AppResult<HttpResponse> {
    let parts = upload::collect_submission(&mut payload, upload_dir.get_ref()).await?;

    let application = match submission::build_application(&parts.fields, parts.resume.as_ref()) {
        Ok(application) => application,
        Err(e) => {
            // Don't leave the stored file behind for a rejected submission.
            if let Some(resume) = &parts.resume {
                let path = upload_dir.join(&resume.filename);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    warn!(
                        "Failed to remove rejected upload {}: {}",
                        path.display(),
                        remove_err
                    );
                }
            }
            return Err(e);
        }
    };

    db::applications::insert_application(pool.get_ref(), &application).await?;

    info!("Application stored for {}", application.email);

    Ok(HttpResponse::Created().json(SubmitResponse {
        message: "Application submitted successfully",
    }))
}

/// Configure application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_application);
}
