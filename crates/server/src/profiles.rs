use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Host, OriginalUri, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use service::profile::domain::{CreateProfileInput, ListParams, ProfileDetail, ProfileSummary};

use crate::errors::ApiError;
use crate::pagination::{request_url, Paginated};
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/profile/list",
    tag = "profile",
    params(
        ("ordering" = Option<String>, Query, description = "name, -name, email, -email, tel or -tel"),
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("page_size" = Option<u64>, Query, description = "items per page, default 10, at most 100"),
    ),
    responses(
        (status = 200, description = "One page of profiles", body = crate::openapi::PaginatedProfilesDoc),
        (status = 400, description = "Unknown ordering", body = crate::openapi::FieldErrorsDoc),
        (status = 404, description = "Invalid page"),
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    host: Option<Host>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Paginated<ProfileSummary>>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let page = state.profiles.list(&params).await?;
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let base = request_url(host.as_ref().map(|Host(h)| h.as_str()), path_and_query);
    Ok(Json(Paginated::from_page(page, base.as_ref())))
}

#[utoipa::path(
    get,
    path = "/profile/detail",
    tag = "profile",
    params(("id" = i32, Query, description = "Profile id")),
    responses(
        (status = 200, description = "Profile detail", body = crate::openapi::ProfileDetailDoc),
        (status = 400, description = "Missing or malformed id", body = crate::openapi::FieldErrorsDoc),
        (status = 404, description = "No such profile"),
    )
)]
pub async fn detail(
    State(state): State<ServerState>,
    query: Result<Query<DetailQuery>, QueryRejection>,
) -> Result<Json<ProfileDetail>, ApiError> {
    let Query(q) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(state.profiles.detail(q.id.as_deref()).await?))
}

#[utoipa::path(
    post,
    path = "/profile/",
    tag = "profile",
    request_body = crate::openapi::CreateProfileRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProfileDetailDoc),
        (status = 400, description = "Field errors", body = crate::openapi::FieldErrorsDoc),
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateProfileInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ProfileDetail>), ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let created = state.profiles.create(input).await?;
    info!(event = "profile_create_response", id = created.id);
    Ok((StatusCode::CREATED, Json(created)))
}
