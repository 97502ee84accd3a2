//! Nearest-point lookup.

use crate::model::{PointRecord, Position};

/// Find the point record closest to `query`.
///
/// Single forward scan; a record replaces the running best only when it is
/// strictly closer, so among equidistant records the first one wins. Returns
/// `None` only when `points` is empty.
///
/// A NaN distance counts as infinitely far. Cost is O(n) per query.
pub fn nearest_point(points: &[PointRecord], query: Position) -> Option<&PointRecord> {
    let mut best: Option<(&PointRecord, f64)> = None;

    for point in points {
        let mut distance = point.position.distance_to(query);
        if distance.is_nan() {
            distance = f64::INFINITY;
        }

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((point, distance)),
        }
    }

    best.map(|(point, _)| point)
}
