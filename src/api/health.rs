//! Health check endpoint.

use actix_web::{get, web, HttpResponse};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
}

/// Health check failure response.
#[derive(Serialize, ToSchema)]
pub struct HealthErrorResponse {
    status: &'static str,
    message: &'static str,
}

/// Health check endpoint.
///
/// Round-trips a trivial query through the pool: healthy only while the
/// store is reachable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 500, description = "Store unreachable", body = HealthErrorResponse)
    )
)]
#[get("/health")]
pub async fn health(conn: web::Data<DatabaseConnection>) -> HttpResponse {
    let probe = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());

    match conn.query_one(probe).await {
        Ok(_) => HttpResponse::Ok().json(HealthResponse { status: "ok" }),
        Err(e) => {
            error!("Healthcheck failed: {}", e);
            HttpResponse::InternalServerError().json(HealthErrorResponse {
                status: "error",
                message: "Database unavailable",
            })
        }
    }
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
