//! Vertex-average centroid of a boundary ring.

use super::coordinate::Coordinate;

/// Arithmetic mean of the ring's vertex longitudes and latitudes.
///
/// This is not an area-weighted centroid. It is adequate for small,
/// near-convex parcels and drifts toward dense vertex clusters on concave
/// shapes. Every vertex counts once, including the closing duplicate of a
/// closed ring. An empty ring yields `(0, 0)`.
pub fn centroid(ring: &[Coordinate]) -> Coordinate {
    if ring.is_empty() {
        return Coordinate::default();
    }

    let n = ring.len() as f64;
    let (lon_sum, lat_sum) = ring
        .iter()
        .fold((0.0, 0.0), |(lon, lat), c| (lon + c.lon, lat + c.lat));

    Coordinate::new(lon_sum / n, lat_sum / n)
}
