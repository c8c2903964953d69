//! List record handlers.
//!
//! Every handler answers with the `{msg, code, data?}` envelope; failures are
//! reported through the body `code`, never through the HTTP status.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{
    MSG_ADD_FAILED, MSG_ADD_SUCCEEDED, MSG_DELETE_NOT_FOUND, MSG_DELETE_SUCCEEDED, MSG_NO_DATA,
    MSG_QUERY_SUCCEEDED, MSG_UPDATE_FAILED, MSG_UPDATE_NOT_FOUND, MSG_UPDATE_SUCCEEDED,
};
use crate::domain::{NewRecord, Record, RecordId, RecordPatch};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, PageQuery, Paginated};

/// Create list record routes
pub fn list_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_record))
        .route("/delete/:id", delete(delete_record))
        .route("/update/:id", put(update_record))
        .route("/list/:name", get(list_by_name))
        .route("/list", get(list_records))
}

/// Path IDs are opaque strings; anything that is not an ID matches nothing.
fn parse_id(raw: &str) -> AppResult<RecordId> {
    raw.trim().parse().map_err(|_| AppError::NotFound)
}

/// Create a record
#[utoipa::path(
    post,
    path = "/user/add",
    tag = "List",
    request_body = NewRecord,
    responses(
        (status = 200, description = "code 200 with the stored record, or code 400 when a field is missing", body = Record)
    )
)]
pub async fn add_record(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<NewRecord>, AppError>,
) -> AppResult<ApiResponse<Record>> {
    let ValidatedJson(new_record) = payload.map_err(|e| {
        tracing::debug!(error = %e, "add payload rejected");
        AppError::empty(MSG_ADD_FAILED)
    })?;

    let record = state.list_service.create_record(new_record).await?;

    Ok(ApiResponse::success(MSG_ADD_SUCCEEDED, record))
}

/// Soft delete a record by ID
#[utoipa::path(
    delete,
    path = "/user/delete/{id}",
    tag = "List",
    params(
        ("id" = String, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "code 200 when deleted, code 400 when the ID is unknown")
    )
)]
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse> {
    let id = parse_id(&id).map_err(|e| e.not_found_as(MSG_DELETE_NOT_FOUND))?;

    state
        .list_service
        .delete_record(id)
        .await
        .map_err(|e| e.not_found_as(MSG_DELETE_NOT_FOUND))?;

    Ok(ApiResponse::ok(MSG_DELETE_SUCCEEDED))
}

/// Update a record by ID; only fields present in the body are written
#[utoipa::path(
    put,
    path = "/user/update/{id}",
    tag = "List",
    params(
        ("id" = String, Path, description = "Record ID")
    ),
    request_body = RecordPatch,
    responses(
        (status = 200, description = "code 200 when updated, code 400 when the ID is unknown or the body is invalid")
    )
)]
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<RecordPatch>, AppError>,
) -> AppResult<ApiResponse> {
    // The record is looked up before the body is inspected.
    let current = match parse_id(&id) {
        Ok(id) => state.list_service.get_record(id).await,
        Err(e) => Err(e),
    }
    .map_err(|e| e.not_found_as(MSG_UPDATE_NOT_FOUND))?;

    let ValidatedJson(patch) = payload.map_err(|e| {
        tracing::debug!(error = %e, "update payload rejected");
        AppError::rejected(MSG_UPDATE_FAILED)
    })?;

    state.list_service.update_record(current, patch).await?;

    Ok(ApiResponse::ok(MSG_UPDATE_SUCCEEDED))
}

/// List records whose name matches exactly
#[utoipa::path(
    get,
    path = "/user/list/{name}",
    tag = "List",
    params(
        ("name" = String, Path, description = "Exact name to match")
    ),
    responses(
        (status = 200, description = "code 200 with matching records, or code 400 with empty data", body = Vec<Record>)
    )
)]
pub async fn list_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<ApiResponse<Vec<Record>>> {
    let records = state.list_service.find_by_name(&name).await?;

    if records.is_empty() {
        return Err(AppError::empty(MSG_NO_DATA));
    }

    Ok(ApiResponse::success(MSG_QUERY_SUCCEEDED, records))
}

/// List all records, optionally paginated
#[utoipa::path(
    get,
    path = "/user/list",
    tag = "List",
    params(PageQuery),
    responses(
        (status = 200, description = "code 200 with {list, total, pageNum, pageSize}, or code 400 with empty data")
    )
)]
pub async fn list_records(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
) -> AppResult<ApiResponse<Paginated<Record>>> {
    let page = query.map(|Query(q)| q).unwrap_or_default().resolve();

    let result = state.list_service.list_records(page).await?;

    if result.is_empty() {
        return Err(AppError::empty(MSG_NO_DATA));
    }

    Ok(ApiResponse::success(MSG_QUERY_SUCCEEDED, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_rejects_garbage_as_not_found() {
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(parse_id(""), Err(AppError::NotFound)));
    }
}
