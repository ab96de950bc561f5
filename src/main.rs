//! Application portal server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.
//! Database provisioning and schema migrations run to completion before the
//! listener binds; a failure there is fatal.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{http::header, web, App, HttpServer};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use application_portal::api;
use application_portal::config::Config;
use application_portal::db;
use application_portal::middleware::RequestLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Create the upload directory (idempotent)
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("Failed to create upload directory");

    // Provision the database, open the pool, run migrations
    let pool = match db::connect_and_migrate(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database {} ready on {}", config.db_name, config.db_host);

    let bind_address = config.bind_address();
    let allowed_origins = config.allowed_origins.clone();
    let upload_dir = config.upload_dir.clone();

    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(upload_dir.clone()))
            .configure(api::configure_health_routes)
            .service(web::scope("/api").configure(api::configure_application_routes))
            .configure(api::openapi::configure_routes)
            // Uploaded resumes, served read-only
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
