//! Date Dash - date idea suggestion engine
//!
//! This library evaluates candidate places against a user's preference filters, scores
//! the ones that pass and picks a single suggestion, either uniformly at random or in
//! proportion to score, with a trace explaining how the pick was made.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    filter_passing, haversine_distance, select, RandomSource, RngSource, SequenceSource, Selector,
};
pub use models::{Coordinate, FilterSet, Place, SelectionMode, SelectionPath, SelectionResult};
pub use services::PlaceCatalog;
