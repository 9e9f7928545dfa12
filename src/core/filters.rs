use crate::core::distance::haversine_distance;
use crate::models::{Coordinate, Evaluation, FilterSet, MatchFlags, Place};

/// Evaluate a place against every filter dimension
///
/// Missing place data is permissive (unknown rating, unknown distance) except for the
/// open-now and price dimensions, where a missing value fails an active filter.
pub fn evaluate_place<'a>(place: &'a Place, filters: &FilterSet) -> Evaluation<'a> {
    let distance_km = compute_distance(place, filters.center);

    let matches = MatchFlags {
        rating: matches_rating(place.rating, filters.active_min_rating()),
        radius: matches_radius(distance_km, filters.active_radius()),
        cuisine: matches_tags(&place.cuisine, &filters.cuisines),
        theme: matches_tags(&place.theme, &filters.themes),
        open_now: matches_open_state(place.is_open_now, filters.open_now),
        price_level: matches_price_level(place.price_level, &filters.price_levels),
    };

    Evaluation {
        place,
        distance_km,
        passes: matches.all(),
        matches,
    }
}

/// Evaluate every place and keep the passing evaluations, preserving input order
pub fn apply_filters<'a>(places: &'a [Place], filters: &FilterSet) -> Vec<Evaluation<'a>> {
    places
        .iter()
        .map(|place| evaluate_place(place, filters))
        .filter(|evaluation| evaluation.passes)
        .collect()
}

/// Places passing the filters, in input order
pub fn filter_passing<'a>(places: &'a [Place], filters: &FilterSet) -> Vec<&'a Place> {
    apply_filters(places, filters)
        .into_iter()
        .map(|evaluation| evaluation.place)
        .collect()
}

#[inline]
fn compute_distance(place: &Place, center: Option<Coordinate>) -> Option<f64> {
    center.map(|center| haversine_distance(center, place.coordinate))
}

#[inline]
fn matches_rating(rating: Option<f64>, min_rating: Option<f64>) -> bool {
    match min_rating {
        Some(min) => rating.unwrap_or(0.0) >= min,
        None => true,
    }
}

/// An unknown distance passes: without a center the radius cannot be checked.
#[inline]
fn matches_radius(distance_km: Option<f64>, radius_km: Option<f64>) -> bool {
    match (distance_km, radius_km) {
        (Some(distance), Some(radius)) => distance <= radius,
        _ => true,
    }
}

/// True if any requested tag equals any place tag, ignoring case
pub(crate) fn matches_tags(values: &[String], wanted: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    if values.is_empty() {
        return false;
    }

    wanted.iter().any(|tag| contains_tag(values, tag))
}

/// Case-insensitive membership test
#[inline]
pub(crate) fn contains_tag(values: &[String], tag: &str) -> bool {
    values.iter().any(|value| value.to_lowercase() == tag.to_lowercase())
}

#[inline]
fn matches_open_state(is_open_now: Option<bool>, open_now: bool) -> bool {
    !open_now || is_open_now.unwrap_or(false)
}

#[inline]
fn matches_price_level(price_level: Option<u8>, levels: &[u8]) -> bool {
    if levels.is_empty() {
        return true;
    }
    match price_level {
        Some(level) => levels.contains(&level),
        None => false,
    }
}
