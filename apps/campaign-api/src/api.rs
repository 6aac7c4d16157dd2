//! REST API handlers
//!
//! Each route serves a mock fixture, optionally narrowed by query-string
//! flags. Fixtures are arrays of objects unless noted otherwise.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub auth_enabled: bool,
    pub dev_mode: bool,
    pub cached_fixtures: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        auth_enabled: state.api_secret.is_some(),
        dev_mode: state.dev_mode,
        cached_fixtures: state.fixtures.cached_count(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactsQuery {
    pub view: Option<String>,
}

/// Contacts, or a named view of them
pub async fn contacts(
    State(state): State<AppState>,
    Query(query): Query<ContactsQuery>,
) -> ApiResult<Json<Value>> {
    let name = match query.view.as_deref().filter(|v| !v.is_empty()) {
        Some(view) => format!("contacts-{}", view),
        None => "contacts".to_string(),
    };
    fixture(&state, &name)
}

#[derive(Debug, Default, Deserialize)]
pub struct ListsQuery {
    pub listid: Option<String>,
    pub loadheaders: Option<String>,
}

/// Lists, list headers, or a single list by id
pub async fn lists(
    State(state): State<AppState>,
    Query(query): Query<ListsQuery>,
) -> ApiResult<Json<Value>> {
    if let Some(id) = query.listid.as_deref() {
        let lists = state.fixtures.load("lists")?;
        return find_by_id(&lists, "lists", id)?
            .map(|list| Json(list.clone()))
            .ok_or_else(|| ApiError::NotFound(format!("List {} not found", id)));
    }

    if query.loadheaders.as_deref() == Some("true") {
        return fixture(&state, "lists-headers");
    }
    fixture(&state, "lists")
}

#[derive(Debug, Default, Deserialize)]
pub struct CampaignsQuery {
    pub campaignid: Option<String>,
}

/// Campaigns, or a single campaign by id
pub async fn campaigns(
    State(state): State<AppState>,
    Query(query): Query<CampaignsQuery>,
) -> ApiResult<Json<Value>> {
    let Some(id) = query.campaignid.as_deref() else {
        return fixture(&state, "campaigns");
    };

    let campaigns = state.fixtures.load("campaigns")?;
    find_by_id(&campaigns, "campaigns", id)?
        .map(|campaign| Json(campaign.clone()))
        .ok_or_else(|| ApiError::NotFound(format!("Campaign {} not found", id)))
}

#[derive(Debug, Default, Deserialize)]
pub struct FilesQuery {
    pub folderid: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

/// Files, filtered by folder and type when given
pub async fn files(
    State(state): State<AppState>,
    Query(query): Query<FilesQuery>,
) -> ApiResult<Json<Value>> {
    let files = state.fixtures.load("files")?;
    let entries = as_array(&files, "files")?;

    let matching: Vec<Value> = entries
        .iter()
        .filter(|file| {
            query
                .folderid
                .as_deref()
                .map_or(true, |id| field_matches(file.get("folderId"), id))
        })
        .filter(|file| {
            query
                .file_type
                .as_deref()
                .map_or(true, |t| file.get("type").and_then(Value::as_str) == Some(t))
        })
        .cloned()
        .collect();

    Ok(Json(Value::Array(matching)))
}

fn fixture(state: &AppState, name: &str) -> ApiResult<Json<Value>> {
    let value = state.fixtures.load(name)?;
    Ok(Json(Value::clone(&value)))
}

fn as_array<'a>(value: &'a Value, name: &str) -> ApiResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ApiError::Malformed(format!("Fixture {}.json is not an array", name)))
}

fn find_by_id<'a>(value: &'a Value, name: &str, id: &str) -> ApiResult<Option<&'a Value>> {
    Ok(as_array(value, name)?
        .iter()
        .find(|entry| field_matches(entry.get("id"), id)))
}

/// Query strings are text; fixture ids may be strings or numbers
fn field_matches(field: Option<&Value>, wanted: &str) -> bool {
    match field {
        Some(Value::String(s)) => s == wanted,
        Some(Value::Number(n)) => n.to_string() == wanted,
        _ => false,
    }
}
