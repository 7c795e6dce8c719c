mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use crate::config::Settings;
use routes::images::AppState;
use routes::{handle_json_payload_error, handle_query_payload_error};
use services::{LabelDetector, ObjectStore, RekognitionDetector, S3ObjectStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting snaplabel image analysis service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!(
        "Configuration loaded (bucket: {}, region: {})",
        settings.aws.bucket, settings.aws.region
    );

    // One shared SDK config for both clients; credentials come from the
    // default provider chain. Each operation is capped at 30s so a hung
    // service call surfaces as a storage/detection error.
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.aws.region.clone()))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(Duration::from_secs(30))
                .build(),
        )
        .load()
        .await;

    let storage: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(
        aws_sdk_s3::Client::new(&sdk_config),
        settings.aws.bucket.clone(),
        settings.aws.region.clone(),
    ));

    info!("S3 client initialized");

    let detector: Arc<dyn LabelDetector> = Arc::new(RekognitionDetector::new(
        aws_sdk_rekognition::Client::new(&sdk_config),
    ));

    info!("Rekognition client initialized");

    // Build application state
    let app_state = AppState { storage, detector };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
