// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod random;
pub mod scoring;
pub mod selector;

pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use filters::{apply_filters, evaluate_place, filter_passing};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use scoring::{calculate_weighted_score, DesirabilityScorer, PlaceScorer};
pub use selector::{select, Selector};
