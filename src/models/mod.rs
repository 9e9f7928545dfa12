// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinate, DebugTrace, Evaluation, Facets, FilterSet, MatchFlags, Place, ScoringWeights,
    SelectionMode, SelectionPath, SelectionResult, TraceEntry, SCORING_WEIGHTS,
};
pub use requests::{FilterPlacesRequest, SuggestRequest};
pub use responses::{
    ErrorResponse, EvaluatePlacesResponse, FilterPlacesResponse, HealthResponse, SuggestResponse,
};
