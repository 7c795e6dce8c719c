use crate::core::{
    describe_labels, generate_storage_key, validate_upload, ValidationError, MAX_UPLOAD_BYTES,
};
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse, UploadResponse, UploadedFile,
};
use crate::services::{LabelDetector, ObjectStore};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStore>,
    pub detector: Arc<dyn LabelDetector>,
}

/// Configure all image routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/upload", web::post().to(upload_image))
        .route("/analyze", web::post().to(analyze_image));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Upload and analyze endpoint
///
/// POST /api/upload
///
/// Multipart body with a single `image` field. The stages run in order:
/// validate, store, detect; the first failure short-circuits into an error
/// response. If detection fails after the object was stored, the object is
/// left in the bucket (accepted inconsistency).
async fn upload_image(state: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let file = match read_image_field(&mut payload).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            tracing::info!("Upload request without an image field");
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "no_file_provided".to_string(),
                details: "No image file provided".to_string(),
            });
        }
        Err(response) => return response,
    };

    if let Err(e) = validate_upload(&file) {
        tracing::info!("Rejected upload of {}: {}", file.file_name, e);
        return validation_error_response(&e);
    }

    let key = generate_storage_key(&file.file_name);

    tracing::info!(
        "Storing {} as {} ({} bytes)",
        file.file_name,
        key,
        file.data.len()
    );

    let stored = match state.storage.put(&key, file.data, &file.content_type).await {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!("Failed to store {}: {}", key, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "storage_error".to_string(),
                details: e.to_string(),
            });
        }
    };

    let labels = match state.detector.detect(&stored.bucket, &stored.key).await {
        Ok(labels) => labels,
        Err(e) => {
            // The already-stored object stays in the bucket on this path.
            tracing::error!("Failed to detect labels for {}: {}", stored.key, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "detection_error".to_string(),
                details: e.to_string(),
            });
        }
    };

    let description = describe_labels(&labels);

    tracing::info!("Analyzed {}: {} labels", stored.key, labels.len());

    HttpResponse::Ok().json(UploadResponse {
        success: true,
        message: "Image uploaded and analyzed successfully".to_string(),
        url: stored.url,
        description,
        labels,
    })
}

/// Analyze an existing stored object
///
/// POST /api/analyze
///
/// Request body:
/// ```json
/// {
///   "bucket": "string",
///   "key": "string"
/// }
/// ```
async fn analyze_image(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    if req.validate().is_err() {
        tracing::info!("Analyze request missing bucket or key");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "missing_parameters".to_string(),
            details: "Bucket and key parameters are required".to_string(),
        });
    }

    match state.detector.detect(&req.bucket, &req.key).await {
        Ok(labels) => {
            let description = describe_labels(&labels);
            tracing::info!(
                "Analyzed s3://{}/{}: {} labels",
                req.bucket,
                req.key,
                labels.len()
            );
            HttpResponse::Ok().json(AnalyzeResponse {
                success: true,
                description,
                labels,
            })
        }
        Err(e) => {
            tracing::error!("Failed to analyze s3://{}/{}: {}", req.bucket, req.key, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "detection_error".to_string(),
                details: e.to_string(),
            })
        }
    }
}

/// Pull the `image` field out of the multipart body.
///
/// Returns `Ok(None)` when no such field is present. Reading stops as soon
/// as the accumulated size passes the upload cap, so an oversized body is
/// never buffered in full and no network call happens for it.
async fn read_image_field(payload: &mut Multipart) -> Result<Option<UploadedFile>, HttpResponse> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_multipart".to_string(),
                details: format!("Malformed multipart body: {}", e),
            })
        })?;

        if field.name() != "image" {
            // Drain any non-image form fields
            while let Some(chunk) = field.next().await {
                if chunk.is_err() {
                    break;
                }
            }
            continue;
        }

        let file_name = field
            .content_disposition()
            .get_filename()
            .unwrap_or("upload")
            .to_string();
        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut data = web::BytesMut::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| {
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: "invalid_multipart".to_string(),
                    details: format!("Error reading file chunk: {}", e),
                })
            })?;

            if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(validation_error_response(&ValidationError::PayloadTooLarge(
                    data.len() + chunk.len(),
                )));
            }

            data.extend_from_slice(&chunk);
        }

        return Ok(Some(UploadedFile {
            data: data.freeze(),
            content_type,
            file_name,
        }));
    }

    Ok(None)
}

fn validation_error_response(err: &ValidationError) -> HttpResponse {
    let code = match err {
        ValidationError::UnsupportedMediaType(_) => "unsupported_media_type",
        ValidationError::PayloadTooLarge(_) => "payload_too_large",
    };

    HttpResponse::BadRequest().json(ErrorResponse {
        error: code.to_string(),
        details: err.to_string(),
    })
}
