//! Attachment handlers
//!
//! Uploads arrive as multipart forms; the file part must be named `file`.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use shelvia_service::dto::UploadResponse;
use shelvia_service::AttachmentService;

use crate::extractors::{ApiKey, ApiPath, DefectFilePath, DefectIdPath};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart field carrying the upload
pub const FILE_FIELD: &str = "file";

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::invalid_input(err.body_text())
    }
}

/// `Content-Disposition` for a download
///
/// The quoted `filename` is an ASCII fallback with `\\` and `"` escaped. Names
/// outside printable ASCII also get an RFC 6266 `filename*` parameter.
fn content_disposition(filename: &str) -> String {
    let mut fallback = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                fallback.push('\\');
                fallback.push(c);
            }
            ' '..='~' => fallback.push(c),
            _ => fallback.push('_'),
        }
    }

    if filename.chars().all(|c| matches!(c, ' '..='~')) {
        format!("attachment; filename=\"{fallback}\"")
    } else {
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            urlencoding::encode(filename)
        )
    }
}

/// Upload an attachment for a defect
///
/// POST /defect/:defect_id/upload
pub async fn upload_file(
    State(state): State<AppState>,
    key: ApiKey,
    ApiPath(path): ApiPath<DefectIdPath>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| ApiError::invalid_input("Multipart field `file` has no filename"))?;
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let service = AttachmentService::new(state.service_context());
        let response = service
            .upload(&key.actor, path.defect_id(), &original_name, &bytes)
            .await?;
        return Ok(Json(response));
    }

    Err(ApiError::invalid_input("Missing multipart field `file`"))
}

/// List a defect's stored attachments
///
/// GET /defect/:defect_id/files
pub async fn list_files(
    State(state): State<AppState>,
    _key: ApiKey,
    ApiPath(path): ApiPath<DefectIdPath>,
) -> ApiResult<Json<Vec<String>>> {
    let files = AttachmentService::new(state.service_context())
        .list(path.defect_id())
        .await?;
    Ok(Json(files))
}

/// Download an attachment as raw bytes
///
/// GET /defect/:defect_id/files/:filename
pub async fn download_file(
    State(state): State<AppState>,
    _key: ApiKey,
    ApiPath(path): ApiPath<DefectFilePath>,
) -> ApiResult<impl IntoResponse> {
    let file = AttachmentService::new(state.service_context())
        .retrieve(path.defect_id(), &path.filename)
        .await?;

    let disposition =
        HeaderValue::from_str(&content_disposition(&file.filename)).map_err(ApiError::internal)?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    ))
}
