//! Orthogonal connector routing between two rectangles.
//!
//! The connector leaves each rectangle through the closest pair of edge
//! midpoints, runs a short perpendicular stub from each, and bends at a
//! single elbow. If the default elbow would land inside either rectangle
//! the route is diverted: first by flipping the elbow to the other
//! stub-axis intersection, then (if still inside the source rectangle)
//! by restarting the path from the source's top or bottom edge.

use crate::constants::STUB_OFFSET;
use crate::geometry::{AnchorLoc, Point, Rect};

/// An edge midpoint tagged with the edge it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub point: Point,
    pub loc: AnchorLoc,
}

/// The closest pair of anchors between two rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub distance: f32,
    pub points: [Point; 2],
    pub locs: [AnchorLoc; 2],
}

/// The four edge-midpoint anchors of a rectangle, in selection order
pub fn anchors(rect: &Rect) -> [Anchor; 4] {
    AnchorLoc::ALL.map(|loc| Anchor {
        point: rect.anchor(loc),
        loc,
    })
}

/// Evaluate all 16 anchor pairings between `a` and `b` and keep the
/// closest.
///
/// Later pairs win only on strict improvement, so equal-distance pairs
/// resolve to the earliest in `AnchorLoc::ALL` order for each rectangle.
pub fn closest_anchors(a: &Rect, b: &Rect) -> Connection {
    let mut best = Connection {
        distance: f32::MAX,
        points: [a.anchor(AnchorLoc::Top), b.anchor(AnchorLoc::Top)],
        locs: [AnchorLoc::Top, AnchorLoc::Top],
    };
    for this in anchors(a) {
        for that in anchors(b) {
            let distance = this.point.dist(that.point);
            if distance < best.distance {
                best = Connection {
                    distance,
                    points: [this.point, that.point],
                    locs: [this.loc, that.loc],
                };
            }
        }
    }
    best
}

/// Extend a lead-out stub from each anchor of a connection.
///
/// Each stub sits `STUB_OFFSET` outside its rectangle along the anchor's
/// edge normal, so the connector always leaves a rectangle orthogonally.
pub fn stub_path(conn: &Connection) -> [Point; 4] {
    let stub = |p: Point, loc: AnchorLoc| {
        let (dx, dy) = loc.normal();
        Point::new(p.x + dx * STUB_OFFSET, p.y + dy * STUB_OFFSET)
    };
    let [start, end] = conn.points;
    [
        start,
        stub(start, conn.locs[0]),
        stub(end, conn.locs[1]),
        end,
    ]
}

/// Place the connector elbow, diverting around `a` or `b` where needed.
///
/// The default elbow is the intersection of the two stub axes. If that
/// lands within `b` it flips to the other orthogonal intersection; if the
/// result lands within `a` the path is rebuilt as three points starting
/// from whichever of `a`'s top/bottom edge midpoints is strictly closer
/// to the far end. On an exact distance tie no substitution happens and
/// the five-point shape is kept.
///
/// Bounds checks are inclusive, so an elbow exactly on an edge counts as
/// inside.
pub fn reroute(path: &[Point; 4], a: &Rect, b: &Rect) -> Vec<Point> {
    let mut elbow = Point::new(path[1].x, path[2].y);
    if b.contains(elbow) {
        elbow = Point::new(path[2].x, path[1].y);
    }
    if a.contains(elbow) {
        elbow = Point::new(a.position.x, b.position.y);
        let goal = path[3];
        let top = a.anchor(AnchorLoc::Top);
        let bottom = a.anchor(AnchorLoc::Bottom);
        let via_top = top.dist(goal);
        let via_bottom = bottom.dist(goal);
        let start = if via_top < via_bottom {
            Some(top)
        } else if via_top > via_bottom {
            Some(bottom)
        } else {
            None
        };
        if let Some(start) = start {
            return vec![start, elbow, goal];
        }
    }
    vec![path[0], path[1], elbow, path[2], path[3]]
}

/// Route the full connector between two rectangles.
///
/// Returns the ordered polyline to stroke: five points in the common
/// case, three when the route restarts from the source's top or bottom
/// edge. The result is a pure function of the two rectangles.
pub fn connector_path(a: &Rect, b: &Rect) -> Vec<Point> {
    let conn = closest_anchors(a, b);
    reroute(&stub_path(&conn), a, b)
}
