use axum::{
    body::Body,
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use listkeeper_domain::{DomainError, ListKind};
use tokio_util::io::ReaderStream;
use tracing::{debug, instrument};

use crate::{dto::ListQuery, errors::ApiError, state::AppState};

/// Multipart field carrying the uploaded list.
const FILE_FIELD: &str = "file";

#[instrument(skip(state), name = "api_download_list")]
pub async fn download_list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let list = params.list.unwrap_or_default();
    let (kind, reader) = state.lists.download.execute(&list).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", kind.download_file_name()),
        ),
    ];
    Ok((headers, Body::from_stream(ReaderStream::new(reader))).into_response())
}

#[instrument(skip(state, multipart), name = "api_upload_list")]
pub async fn upload_list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<StatusCode, ApiError> {
    let list = params.list.unwrap_or_default();
    list.parse::<ListKind>()?;

    let mut multipart = multipart.map_err(|e| DomainError::MissingFilePart(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DomainError::MalformedRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // A part without a filename is a plain form value, not a file.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let contents = field
            .bytes()
            .await
            .map_err(|e| DomainError::MalformedRequest(e.body_text()))?;
        debug!(file_name = %file_name, bytes = contents.len(), "Upload received");

        state.lists.upload.execute(&list, contents).await?;
        return Ok(StatusCode::OK);
    }

    Err(DomainError::MissingFilePart(format!("no '{}' field in form", FILE_FIELD)).into())
}
