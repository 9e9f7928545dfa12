use crate::core::filters::contains_tag;
use crate::models::{Evaluation, FilterSet, SCORING_WEIGHTS};

/// Assigns a desirability score to an evaluated place.
///
/// The selector samples passing places in proportion to these scores, so
/// implementations should return non-negative values. Scores summing to zero or less
/// make the selector fall back to a uniform draw.
pub trait PlaceScorer {
    fn score(&self, evaluation: &Evaluation<'_>, filters: &FilterSet) -> f64;
}

impl<F> PlaceScorer for F
where
    F: Fn(&Evaluation<'_>, &FilterSet) -> f64,
{
    fn score(&self, evaluation: &Evaluation<'_>, filters: &FilterSet) -> f64 {
        self(evaluation, filters)
    }
}

/// Fixed-weight blend of rating, distance, tag affinity, open state and price
#[derive(Debug, Clone, Copy, Default)]
pub struct DesirabilityScorer;

impl PlaceScorer for DesirabilityScorer {
    fn score(&self, evaluation: &Evaluation<'_>, filters: &FilterSet) -> f64 {
        calculate_weighted_score(evaluation, filters)
    }
}

/// Calculate a desirability score (roughly 0-1) for an evaluated place
///
/// Scoring formula:
/// score = (
///     rating_score * 0.35 +              # Higher rating = higher
///     distance_score * 0.25 +            # Closer to center = higher
///     max(cuisine, theme) * 0.20 +       # Strong in either tag dimension
///     avg(cuisine, theme) * 0.10 +       # Strong in both
///     open_score * 0.05 +
///     price_score * 0.05
/// )
pub fn calculate_weighted_score(evaluation: &Evaluation<'_>, filters: &FilterSet) -> f64 {
    let place = evaluation.place;
    let weights = SCORING_WEIGHTS;

    let rating_score = normalize_rating(place.rating);
    let distance_score = normalize_distance(evaluation.distance_km, filters.active_radius());
    let cuisine_score = affinity_score(&place.cuisine, &filters.cuisines);
    let theme_score = affinity_score(&place.theme, &filters.themes);

    let open_score = if filters.open_now {
        if place.open_now() { 1.0 } else { 0.0 }
    } else {
        0.5
    };

    let price_score = if filters.price_levels.is_empty() {
        0.6
    } else {
        match place.price_level {
            Some(level) if filters.price_levels.contains(&level) => 1.0,
            _ => 0.0,
        }
    };

    let combined_affinity = cuisine_score.max(theme_score);
    let average_affinity = (cuisine_score + theme_score) / 2.0;

    rating_score * weights.rating
        + distance_score * weights.distance
        + combined_affinity * weights.combined_affinity
        + average_affinity * weights.average_affinity
        + open_score * weights.open
        + price_score * weights.price
}

/// Rating score (0-1); unrated places get a neutral 0.5
#[inline]
fn normalize_rating(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r > 0.0 => (r / 5.0).clamp(0.0, 1.0),
        _ => 0.5,
    }
}

/// Distance score (0-1)
/// Linear decay from 1 at the center to 0 at the radius edge
#[inline]
fn normalize_distance(distance_km: Option<f64>, radius_km: Option<f64>) -> f64 {
    match (distance_km, radius_km) {
        (Some(distance), Some(radius)) => 1.0 - distance.clamp(0.0, radius) / radius,
        _ => 0.75,
    }
}

/// Tag affinity score (0-1)
///
/// With no requested tags, places that carry any tags get a mild bonus. Otherwise the
/// score is the share of requested tags the place satisfies.
#[inline]
fn affinity_score(values: &[String], wanted: &[String]) -> f64 {
    if wanted.is_empty() {
        return if values.is_empty() { 0.4 } else { 0.6 };
    }
    if values.is_empty() {
        return 0.0;
    }

    let matched = wanted.iter().filter(|tag| contains_tag(values, tag)).count();
    matched as f64 / wanted.len() as f64
}
