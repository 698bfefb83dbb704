//! # Hit testing
//!
//! Maps raw pointer coordinates onto grid nodes. Two operations:
//!
//! - `node_at` — nearest node whose activation circle contains the point.
//! - `pass_through_nodes` — nodes the straight segment from a selected node
//!   to the current pointer target crosses, for fast swipes that skip over
//!   a node without the pointer ever entering its circle.

use crate::geometry::{Vec2, distance_to_segment, project_on_segment};
use crate::grid::GridModel;

/// Node whose activation circle contains `point`, if any. The boundary is
/// inclusive: a point exactly one radius from a center still hits.
///
/// With aggressive spacing two circles can overlap; the tie-break prefers a
/// node not yet in `selected`, then the smaller index, so a wobbling pointer
/// near an already-claimed node still reaches the fresh one.
pub fn node_at(grid: &GridModel, point: Vec2, selected: &[u16]) -> Option<u16> {
    let radius = grid.node_radius();
    let mut best: Option<(bool, u16)> = None;
    for node in grid.nodes() {
        if node.center.distance(point) > radius {
            continue;
        }
        let candidate = (selected.contains(&node.index), node.index);
        best = Some(match best {
            Some(current) if current < candidate => current,
            _ => candidate,
        });
    }
    best.map(|(_, index)| index)
}

/// Nodes (excluding `from`) whose centers lie within activation radius of
/// the segment from `from`'s center to `to`, ordered by distance along the
/// segment. The node under `to` itself, if any, is included last.
pub fn pass_through_nodes(grid: &GridModel, from: u16, to: Vec2) -> Vec<u16> {
    let Some(start) = grid.node_center(from) else {
        return Vec::new();
    };
    let radius = grid.node_radius();
    let mut hits: Vec<(f32, u16)> = grid
        .nodes()
        .iter()
        .filter(|n| n.index != from)
        .filter_map(|n| {
            let within = distance_to_segment(n.center, start, to) <= radius;
            within.then(|| (project_on_segment(n.center, start, to), n.index))
        })
        .collect();
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    hits.into_iter().map(|(_, index)| index).collect()
}
