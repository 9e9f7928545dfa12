use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "lng must be between -180 and 180"))]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Candidate destination for a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuisine: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub theme: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_now: Option<bool>,
    /// 0 = free, 4 = premium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Place {
    /// Helper to get is_open_now as a bool, defaulting to false
    pub fn open_now(&self) -> bool {
        self.is_open_now.unwrap_or(false)
    }
}

/// Preference filters applied before surfacing suggestions
///
/// Every absent or empty field matches everything for its dimension, so
/// `FilterSet::default()` lets every place through.
///
/// The snake_case and lowercase aliases let the same struct load from configuration,
/// where keys arrive lowercased.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default)]
    #[validate(nested)]
    pub center: Option<Coordinate>,
    #[serde(default, alias = "radius_km", alias = "radiuskm")]
    pub radius_km: Option<f64>,
    #[serde(default, alias = "min_rating", alias = "minrating")]
    #[validate(range(min = 0.0, max = 5.0, message = "minRating must be between 0 and 5"))]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default, alias = "open_now", alias = "opennow")]
    pub open_now: bool,
    #[serde(default, alias = "price_levels", alias = "pricelevels")]
    #[validate(custom(function = "validate_price_levels"))]
    pub price_levels: Vec<u8>,
}

fn validate_price_levels(levels: &[u8]) -> Result<(), ValidationError> {
    if levels.iter().any(|level| *level > 4) {
        let mut error = ValidationError::new("price_level_out_of_range");
        error.message = Some("priceLevels must be between 0 and 4".into());
        return Err(error);
    }
    Ok(())
}

impl FilterSet {
    /// Radius constraint, if one is in effect.
    ///
    /// Non-positive and non-finite radii mean "no constraint".
    pub fn active_radius(&self) -> Option<f64> {
        self.radius_km.filter(|r| r.is_finite() && *r > 0.0)
    }

    /// Minimum rating constraint, if one is in effect. Zero and NaN are ignored.
    pub fn active_min_rating(&self) -> Option<f64> {
        self.min_rating.filter(|m| *m != 0.0 && !m.is_nan())
    }
}

/// Per-dimension outcome of evaluating one place against a filter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFlags {
    pub rating: bool,
    pub radius: bool,
    pub cuisine: bool,
    pub theme: bool,
    pub open_now: bool,
    pub price_level: bool,
}

impl MatchFlags {
    pub fn all(&self) -> bool {
        self.rating
            && self.radius
            && self.cuisine
            && self.theme
            && self.open_now
            && self.price_level
    }
}

/// Match and distance snapshot for one place under one filter set.
///
/// Recomputed on every call; borrows the place it describes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation<'a> {
    pub place: &'a Place,
    pub distance_km: Option<f64>,
    pub matches: MatchFlags,
    pub passes: bool,
}

/// How a suggestion is drawn from the passing places
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Random,
    #[default]
    Weighted,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Random => write!(f, "random"),
            SelectionMode::Weighted => write!(f, "weighted"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SelectionMode::Random),
            "weighted" => Ok(SelectionMode::Weighted),
            other => Err(format!("unknown selection mode: {}", other)),
        }
    }
}

/// Which branch of the selector produced the result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SelectionPath {
    /// No candidate passed the filters
    NoMatch,
    /// Uniform draw over the passing candidates
    Random { index: usize },
    /// Cumulative-weight walk picked a candidate
    #[serde(rename_all = "camelCase")]
    Weighted { total_score: f64 },
    /// Scores summed to zero or less, so a uniform draw was used instead
    WeightedZeroFallback { index: usize },
    /// The walk ran off the end; the highest-scoring candidate was taken
    WeightedWalkFallback,
}

impl SelectionPath {
    /// Human-readable explanation of the path
    pub fn note(&self) -> String {
        match self {
            SelectionPath::NoMatch => "No places matched the active filters.".to_string(),
            SelectionPath::Random { index } => format!("Randomly selected index {}.", index),
            SelectionPath::Weighted { total_score } => {
                format!("Weighted pick with totalScore {:.2}.", total_score)
            }
            SelectionPath::WeightedZeroFallback { index } => format!(
                "Weighted scores were zero; reverted to uniform random selection (index {}).",
                index
            ),
            SelectionPath::WeightedWalkFallback => {
                "Fallback to highest-scoring place after distribution walk-through.".to_string()
            }
        }
    }
}

/// Per-candidate line of the debug trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub matches: MatchFlags,
}

/// Auditable record of how a selection outcome was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugTrace {
    pub mode: SelectionMode,
    pub total_candidates: usize,
    pub filtered_count: usize,
    pub entries: Vec<TraceEntry>,
    pub path: SelectionPath,
    pub note: String,
}

/// Outcome of a selection call
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult<'a> {
    pub place: Option<&'a Place>,
    pub debug: DebugTrace,
}

/// Distinct tags available across a set of places
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub cuisines: Vec<String>,
    pub themes: Vec<String>,
}

/// Scoring weights
///
/// Fixed blend used by the desirability scorer; the weights sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub rating: f64,
    pub distance: f64,
    pub combined_affinity: f64,
    pub average_affinity: f64,
    pub open: f64,
    pub price: f64,
}

pub const SCORING_WEIGHTS: ScoringWeights = ScoringWeights {
    rating: 0.35,
    distance: 0.25,
    combined_affinity: 0.20,
    average_affinity: 0.10,
    open: 0.05,
    price: 0.05,
};
