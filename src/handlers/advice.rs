use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::{forward_response, parse_timeframe, TimeframeQuery};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// One row of the mood service's summary projection. The set for a period
/// may be empty and the percentages are not guaranteed to sum to 100.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodSummaryEntry {
    #[serde(default)]
    pub mood_type_id: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub percentage: f64,
}

impl MoodSummaryEntry {
    fn validate(&self) -> Result<(), &'static str> {
        if self.mood_type_id == 0 {
            return Err("moodTypeId is required");
        }
        if self.count < 1 {
            return Err("count must be at least 1");
        }
        if self.percentage == 0.0 {
            return Err("percentage is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdviceSelection {
    advice_id: i64,
    title: String,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdvicePeriodRecord {
    user_id: i64,
    advice_id: i64,
    from: String,
    to: String,
}

/// Advice retrieval for a period: cached lookup first, then compute from the
/// mood summary, then remember the result without blocking the reply. Steps
/// run strictly sequentially and nothing is retried.
pub async fn get_advice(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<TimeframeQuery>,
) -> Result<Response, ApiError> {
    tracing::info!("Getting advice");

    let (from, to) = parse_timeframe(&query)?;

    // Advice already recorded for this period short-circuits everything.
    // Any non-200 here means "no cached advice", not an error.
    let response = state.advice.get_by_period(&from, &to, user.user_id).await?;
    if response.status() == StatusCode::OK {
        return Ok(forward_response(response).await);
    }

    let response = state.mood.get_summary(&from, &to, user.user_id).await?;
    if response.status() != StatusCode::OK {
        return Ok(forward_response(response).await);
    }

    let body = response.bytes().await.map_err(|err| {
        tracing::error!("Failed to read mood summary: {}", err);
        ApiError::internal_server_error("Failed to read mood summary")
    })?;

    let entries: Vec<MoodSummaryEntry> = serde_json::from_slice(&body).map_err(|err| {
        tracing::error!("Failed to parse mood summary: {}", err);
        ApiError::internal_server_error("Failed to parse mood summary")
    })?;

    for entry in &entries {
        if let Err(reason) = entry.validate() {
            return Err(ApiError::bad_request(format!("Invalid mood summary entry: {}", reason)));
        }
    }

    // The validated entries go to the selection endpoint exactly as decoded
    let select_body = serde_json::to_vec(&entries)
        .map_err(|_| ApiError::internal_server_error("Failed to encode request body"))?;

    let response = state.advice.select(select_body).await?;
    if response.status() != StatusCode::OK {
        return Ok(forward_response(response).await);
    }

    let selection: AdviceSelection = response.json().await.map_err(|err| {
        tracing::error!("Failed to parse advice selection response: {}", err);
        ApiError::internal_server_error("Failed to parse advice selection response")
    })?;

    // Best-effort persistence on a detached task: the selection is already
    // the answer, and failing to record it must not change or delay it.
    let record = AdvicePeriodRecord {
        user_id: user.user_id,
        advice_id: selection.advice_id,
        from,
        to,
    };
    let advice_service = state.advice.clone();
    tokio::spawn(async move {
        let body = match serde_json::to_vec(&record) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!("Failed to encode advice period record: {}", err);
                return;
            }
        };
        match advice_service.save_period(body).await {
            Ok(response) if !response.status().is_success() => {
                tracing::error!(status = %response.status(), "Failed to save advice period");
            }
            Ok(_) => {}
            Err(err) => tracing::error!("Failed to save advice period: {}", err),
        }
    });

    Ok((StatusCode::OK, Json(selection)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mood_type_id: i64, count: i64, percentage: f64) -> MoodSummaryEntry {
        MoodSummaryEntry {
            mood_type_id,
            count,
            percentage,
        }
    }

    #[test]
    fn accepts_a_well_formed_entry() {
        assert!(entry(2, 5, 62.5).validate().is_ok());
    }

    #[test]
    fn rejects_a_missing_mood_type() {
        assert!(entry(0, 5, 62.5).validate().is_err());
    }

    #[test]
    fn rejects_a_non_positive_count() {
        assert!(entry(2, 0, 62.5).validate().is_err());
        assert!(entry(2, -1, 62.5).validate().is_err());
    }

    #[test]
    fn rejects_a_missing_percentage() {
        assert!(entry(2, 5, 0.0).validate().is_err());
    }

    #[test]
    fn summary_entries_round_trip_unchanged() {
        let body = r#"[{"moodTypeId":1,"count":5,"percentage":62.5},{"moodTypeId":3,"count":3,"percentage":37.5}]"#;
        let entries: Vec<MoodSummaryEntry> = serde_json::from_slice(body.as_bytes()).unwrap();
        let encoded = serde_json::to_string(&entries).unwrap();
        assert_eq!(encoded, body);
    }

    #[test]
    fn missing_fields_decode_to_invalid_entries() {
        let entries: Vec<MoodSummaryEntry> = serde_json::from_str(r#"[{"count":5}]"#).unwrap();
        assert!(entries[0].validate().is_err());
    }
}
