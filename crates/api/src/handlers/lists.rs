use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use listkeeper_domain::{DomainError, PageNumber};
use tracing::{debug, instrument};

use crate::{
    dto::{DomainRequest, ListsResponse, PaginatedListQuery, PaginatedListResponse},
    errors::ApiError,
    state::AppState,
};

#[instrument(skip(state), name = "api_get_lists")]
pub async fn get_lists(State(state): State<AppState>) -> Result<Json<ListsResponse>, ApiError> {
    let lists = state.lists.get_all.execute().await?;
    debug!(
        blocklist = lists.blocklist.len(),
        allowlist = lists.allowlist.len(),
        "Lists retrieved successfully"
    );
    Ok(Json(lists.into()))
}

#[instrument(skip(state, params), name = "api_get_paginated_list")]
pub async fn get_paginated_list(
    State(state): State<AppState>,
    params: Result<Query<PaginatedListQuery>, QueryRejection>,
) -> Result<Json<PaginatedListResponse>, ApiError> {
    let Query(params) = params.map_err(|e| DomainError::MalformedRequest(e.body_text()))?;
    let page = PageNumber::parse(params.page.as_deref());

    let result = state
        .lists
        .get_paginated
        .execute(
            params.list.as_deref().unwrap_or_default(),
            page,
            params.search.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(result.into()))
}

#[instrument(skip(state, body), name = "api_add_domain")]
pub async fn add_domain(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let req = parse_domain_request(&body)?;
    state
        .lists
        .add_domain
        .execute(&req.list, &req.domain)
        .await?;
    Ok(StatusCode::OK)
}

#[instrument(skip(state, body), name = "api_remove_domain")]
pub async fn remove_domain(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let req = parse_domain_request(&body)?;
    state
        .lists
        .remove_domain
        .execute(&req.list, &req.domain)
        .await?;
    Ok(StatusCode::OK)
}

/// The body is decoded as JSON whatever `Content-Type` the client sent.
fn parse_domain_request(body: &[u8]) -> Result<DomainRequest, DomainError> {
    serde_json::from_slice(body).map_err(|e| DomainError::MalformedRequest(e.to_string()))
}
