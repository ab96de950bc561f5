//! OpenAPI documentation configuration.

use actix_web::{get, web, HttpResponse};
use utoipa::OpenApi;

use crate::{api, error};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Application Portal Server",
        version = "0.3.0",
        description = "API server for accepting and storing internship application submissions"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(api::health::health, api::applications::submit_application),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            api::health::HealthErrorResponse,
            api::applications::SubmitResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Applications", description = "Application form submission")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Configure documentation routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
