use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{FilterSet, SelectionMode};

/// Request to list the places passing a filter set
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilterPlacesRequest {
    #[serde(default)]
    #[validate(nested)]
    pub filters: Option<FilterSet>,
}

/// Request for a single date suggestion
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    #[serde(default)]
    #[validate(nested)]
    pub filters: Option<FilterSet>,
    #[serde(default)]
    pub mode: Option<SelectionMode>,
    /// Seed for a reproducible draw
    #[serde(default)]
    pub seed: Option<u64>,
}
