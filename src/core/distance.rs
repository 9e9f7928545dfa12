use crate::models::Coordinate;

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle (Haversine) distance between two coordinates in kilometers
///
/// The square root of the haversine term is clamped to 1.0 before `asin`, since rounding
/// can push it just past 1 for antipodal points and `asin` would return NaN.
///
/// # Arguments
/// * `a` - First coordinate in degrees
/// * `b` - Second coordinate in degrees
///
/// # Returns
/// Distance in kilometers, never negative
#[inline]
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
