use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::{forward_response, parse_timeframe, TimeframeQuery, DATE_FORMAT};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddMoodInput {
    mood_type_id: Option<i64>,
    #[serde(default)]
    note: String,
    date: Option<String>,
}

pub async fn add_mood(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::info!("Adding mood entry");

    let input: AddMoodInput = serde_json::from_slice(&body)
        .map_err(|_| ApiError::invalid_json("Invalid request payload"))?;

    let mut field_errors = HashMap::new();
    if input.mood_type_id.is_none() {
        field_errors.insert("moodTypeId".to_string(), "This field is required".to_string());
    }
    if input.note.chars().count() > 500 {
        field_errors.insert("note".to_string(), "Must be at most 500 characters".to_string());
    }
    match input.date.as_deref() {
        None => {
            field_errors.insert("date".to_string(), "This field is required".to_string());
        }
        Some(date) if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() => {
            field_errors.insert("date".to_string(), "Must be a date in YYYY-MM-DD format".to_string());
        }
        Some(_) => {}
    }
    if !field_errors.is_empty() {
        return Err(ApiError::validation_error("Invalid mood entry", Some(field_errors)));
    }

    // The principal is the owner; clients cannot create entries for other users
    let downstream_body = json!({
        "userId": user.user_id,
        "moodTypeId": input.mood_type_id,
        "note": input.note,
        "date": input.date,
    });
    let body = serde_json::to_vec(&downstream_body)
        .map_err(|_| ApiError::internal_server_error("Failed to encode request body"))?;

    let response = state.mood.add(body).await?;
    Ok(forward_response(response).await)
}

pub async fn get_moods(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<TimeframeQuery>,
) -> Result<Response, ApiError> {
    tracing::info!("Getting moods");

    let (from, to) = parse_timeframe(&query)?;
    let response = state.mood.get_moods(&from, &to, user.user_id).await?;
    Ok(forward_response(response).await)
}

pub async fn get_mood_types(State(state): State<AppState>) -> Result<Response, ApiError> {
    tracing::info!("Get mood types");

    let response = state.mood.get_types().await?;
    Ok(forward_response(response).await)
}

pub async fn get_mood_summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<TimeframeQuery>,
) -> Result<Response, ApiError> {
    tracing::info!("Getting mood summary");

    let (from, to) = parse_timeframe(&query)?;
    let response = state.mood.get_summary(&from, &to, user.user_id).await?;
    Ok(forward_response(response).await)
}

/// Owner field of a single mood entry as the mood service records it.
#[derive(Debug, Deserialize)]
struct MoodEntryOwner {
    #[serde(rename = "UserID")]
    user_id: i64,
}

/// Outcome of the fetch-then-authorize step shared by the single-entry
/// handlers.
enum EntryAccess {
    /// The principal owns the entry; the raw fetched body is available.
    Owned(Bytes),
    /// The reply is already determined: a forwarded non-200 from the mood
    /// service, or a 403 minted here on owner mismatch.
    Reply(Response),
}

/// Resolves the entry's recorded owner and compares it to the principal.
/// Must complete with `Owned` before any mutating call is issued; there is
/// no compensating transaction, this check is the only gate. The check and
/// the mutation are two independent calls, so a concurrent ownership change
/// between them is possible; the mood service remains the authority.
async fn fetch_and_authorize(
    state: &AppState,
    mood_id: i64,
    user: &AuthUser,
) -> Result<EntryAccess, ApiError> {
    let response = state.mood.get_mood(mood_id).await?;

    if response.status() != StatusCode::OK {
        return Ok(EntryAccess::Reply(forward_response(response).await));
    }

    let body = response.bytes().await.map_err(|err| {
        tracing::error!("Failed to read mood entry: {}", err);
        ApiError::internal_server_error("Failed to read mood entry")
    })?;

    let entry: MoodEntryOwner = serde_json::from_slice(&body).map_err(|err| {
        tracing::error!("Failed to decode mood entry: {}", err);
        ApiError::internal_server_error("Failed to decode mood entry")
    })?;

    if entry.user_id != user.user_id {
        return Ok(EntryAccess::Reply(
            ApiError::forbidden("Mood entry does not belong to the logged user").into_response(),
        ));
    }

    Ok(EntryAccess::Owned(body))
}

fn parse_mood_id(id: &str) -> Result<i64, ApiError> {
    id.parse::<i64>()
        .map_err(|_| ApiError::bad_request("Invalid id parameter"))
}

pub async fn get_mood(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::info!("Getting mood entry by ID");

    let mood_id = parse_mood_id(&id)?;
    match fetch_and_authorize(&state, mood_id, &user).await? {
        EntryAccess::Reply(response) => Ok(response),
        EntryAccess::Owned(body) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()),
    }
}

pub async fn delete_mood(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::info!("Deleting mood entry");

    let mood_id = parse_mood_id(&id)?;
    match fetch_and_authorize(&state, mood_id, &user).await? {
        EntryAccess::Reply(response) => Ok(response),
        EntryAccess::Owned(_) => {
            let response = state.mood.delete_mood(mood_id).await?;
            Ok(forward_response(response).await)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateMoodInput {
    id: Option<i64>,
    mood_type_id: Option<i64>,
    note: Option<String>,
}

pub async fn update_mood(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::info!("Updating mood entry");

    let input: UpdateMoodInput = serde_json::from_slice(&body)
        .map_err(|_| ApiError::invalid_json("Invalid request payload"))?;

    let mut field_errors = HashMap::new();
    if input.id.is_none() {
        field_errors.insert("id".to_string(), "This field is required".to_string());
    }
    if input.mood_type_id.is_none() {
        field_errors.insert("moodTypeId".to_string(), "This field is required".to_string());
    }
    match input.note.as_deref() {
        None | Some("") => {
            field_errors.insert("note".to_string(), "This field is required".to_string());
        }
        Some(note) if note.chars().count() > 500 => {
            field_errors.insert("note".to_string(), "Must be at most 500 characters".to_string());
        }
        Some(_) => {}
    }
    let mood_id = match input.id {
        Some(id) if field_errors.is_empty() => id,
        _ => return Err(ApiError::validation_error("Invalid mood entry", Some(field_errors))),
    };

    match fetch_and_authorize(&state, mood_id, &user).await? {
        EntryAccess::Reply(response) => Ok(response),
        EntryAccess::Owned(_) => {
            let downstream_body = json!({
                "id": mood_id,
                "moodTypeId": input.mood_type_id,
                "note": input.note,
            });
            let body = serde_json::to_vec(&downstream_body)
                .map_err(|_| ApiError::internal_server_error("Failed to encode request body"))?;

            let response = state.mood.update(body).await?;
            Ok(forward_response(response).await)
        }
    }
}
