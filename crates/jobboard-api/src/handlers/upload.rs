//! File upload handler - POST /api/upload

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap},
    Json,
};
use jobboard_core::dto::UploadResponse;
use jobboard_shared::constants::UPLOADS_ROUTE;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::AuthUser;
use crate::state::AppState;

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "pdf", "doc", "docx"];

/// Lower-cased extension of `filename` if it is an accepted upload type.
fn allowed_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

fn public_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = state.config.app.public_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{}", host)
}

pub async fn upload_handler(
    State(state): State<AppState>,
    user: AuthUser,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
        upload = Some((filename, data.to_vec()));
    }

    let (filename, data) = upload.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    let ext = allowed_extension(&filename).ok_or_else(|| {
        ApiError::bad_request(
            "Only images (jpg, png, gif, webp) and documents (pdf, doc, docx) are allowed",
        )
    })?;

    if data.len() > state.config.upload.max_file_size_bytes {
        return Err(ApiError::bad_request("File too large"));
    }

    let dir = state.upload_dir();
    let stored_name = format!(
        "{}-{}.{}",
        chrono::Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        ext
    );

    tokio::fs::create_dir_all(&dir).await.map_err(|e| {
        error!("Failed to create upload dir {}: {}", dir.display(), e);
        ApiError::InternalError(e.to_string())
    })?;
    tokio::fs::write(dir.join(&stored_name), &data).await.map_err(|e| {
        error!("Failed to store upload {}: {}", stored_name, e);
        ApiError::InternalError(e.to_string())
    })?;

    let content_type = mime_guess::from_ext(&ext).first_or_octet_stream();
    info!(
        "User {} uploaded {} as {} ({}, {} bytes)",
        user.user_id,
        filename,
        stored_name,
        content_type,
        data.len()
    );

    Ok(Json(UploadResponse {
        url: format!("{}{}/{}", public_base(&state, &headers), UPLOADS_ROUTE, stored_name),
    }))
}
