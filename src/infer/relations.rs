//! Edge inference from line segments.

use super::nearest_point;
use crate::model::{ContainmentEdge, PointRecord, Segment};

/// Infer one containment edge per segment.
///
/// The start endpoint resolves to the source, the end endpoint to the target.
/// A segment whose endpoints resolve to the same point yields a self-loop;
/// nothing is filtered. With no points, no edges are produced.
pub fn infer_edges(segments: &[Segment], points: &[PointRecord]) -> Vec<ContainmentEdge> {
    let edges: Vec<ContainmentEdge> = segments
        .iter()
        .filter_map(|segment| {
            let source = nearest_point(points, segment.start)?;
            let target = nearest_point(points, segment.end)?;
            Some(ContainmentEdge::contains(source.id, target.id))
        })
        .collect();

    log::debug!(
        "inferred {} edges from {} segments over {} points ({} self-loops)",
        edges.len(),
        segments.len(),
        points.len(),
        edges.iter().filter(|e| e.is_self_loop()).count()
    );

    edges
}
