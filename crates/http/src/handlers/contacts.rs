use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use std::sync::Arc;

use contactbook_core::{Contact, ContactId, ContactInput};

use crate::AppState;
use crate::api_error::ApiError;
use crate::headers::{filter_from_headers, page_headers};
use crate::query_types::ListParams;

/// Ids that don't parse can't name a contact.
fn parse_id(raw: &str) -> Result<ContactId, ApiError> {
    raw.parse().map_err(|_| ApiError::contact_not_found())
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<(HeaderMap, Json<Vec<Contact>>), ApiError> {
    let list = params.into_list_query(filter_from_headers(&headers)?);
    let page = state.contact_service.list_contacts(&list).await?;
    Ok((page_headers(&page.meta), Json(page.items)))
}

pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.contact_service.get_contact(id).await?))
}

pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(input) = payload?;
    let contact = state.contact_service.create_contact(input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    Ok(Json(state.contact_service.update_contact(id, input).await?))
}

pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.contact_service.delete_contact(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
