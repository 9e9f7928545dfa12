use serde::Serialize;
use crate::models::domain::{DebugTrace, Place, TraceEntry};

/// Response for the filter endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPlacesResponse<'a> {
    pub places: Vec<&'a Place>,
    pub total_results: usize,
}

/// Response for the evaluate endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePlacesResponse {
    pub entries: Vec<TraceEntry>,
    pub passing_count: usize,
}

/// Response for the suggestion endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse<'a> {
    pub place: Option<&'a Place>,
    pub debug: DebugTrace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub place_count: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
