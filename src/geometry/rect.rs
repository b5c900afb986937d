#[cfg(feature = "json")]
use serde_derive::{Deserialize, Serialize};

use crate::geometry::{AnchorLoc, Point, Size};

/// An axis-aligned rectangle in user coordinates, positioned by its
/// *center* rather than a corner.
///
/// All edge and corner values derive from center ± half-extent, so a
/// zero-width or zero-height `Rect` degenerates to a line or point
/// without any special-casing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    pub const fn from_cwh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(cx, cy), Size::new(width, height))
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.size.width / 2.
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.width / 2.
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.size.height / 2.
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.height / 2.
    }

    /// Edge midpoint for the given location
    pub fn anchor(&self, loc: AnchorLoc) -> Point {
        match loc {
            AnchorLoc::Top => Point::new(self.position.x, self.top()),
            AnchorLoc::Bottom => Point::new(self.position.x, self.bottom()),
            AnchorLoc::Left => Point::new(self.left(), self.position.y),
            AnchorLoc::Right => Point::new(self.right(), self.position.y),
        }
    }

    /// Inclusive containment test; points on the boundary count as inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// AABB overlap test. Rectangles whose edges merely touch are
    /// separated, not overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.left()
            || other.right() <= self.left()
            || self.bottom() <= other.top()
            || other.bottom() <= self.top())
    }

    /// True if any facing pair of edge coordinates differ by less than
    /// `min_distance`.
    ///
    /// Each axis is checked independently of the other, so two rectangles
    /// far apart vertically may still report a small horizontal gap. This
    /// matches the drag-blocking behaviour the guard exists to provide.
    pub fn too_close(&self, other: &Rect, min_distance: f32) -> bool {
        (self.right() - other.left()).abs() < min_distance
            || (other.right() - self.left()).abs() < min_distance
            || (self.bottom() - other.top()).abs() < min_distance
            || (other.bottom() - self.top()).abs() < min_distance
    }

    /// Same rectangle with its center moved to `center`
    pub fn moved_to(&self, center: Point) -> Rect {
        Rect::new(center, self.size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::from_cwh(100., 50., 40., 20.);
        assert_eq!(r.left(), 80.);
        assert_eq!(r.right(), 120.);
        assert_eq!(r.top(), 40.);
        assert_eq!(r.bottom(), 60.);
    }

    #[test]
    fn test_anchors() {
        let r = Rect::from_cwh(0., 0., 40., 20.);
        assert_eq!(r.anchor(AnchorLoc::Top), Point::new(0., -10.));
        assert_eq!(r.anchor(AnchorLoc::Bottom), Point::new(0., 10.));
        assert_eq!(r.anchor(AnchorLoc::Left), Point::new(-20., 0.));
        assert_eq!(r.anchor(AnchorLoc::Right), Point::new(20., 0.));
    }

    #[test]
    fn test_contains() {
        let r = Rect::from_cwh(0., 0., 40., 40.);
        assert!(r.contains(Point::new(0., 0.)));
        // boundary is inclusive
        assert!(r.contains(Point::new(20., 20.)));
        assert!(r.contains(Point::new(-20., 0.)));
        assert!(!r.contains(Point::new(20.01, 0.)));
        assert!(!r.contains(Point::new(0., -21.)));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::from_cwh(0., 0., 40., 40.);
        assert!(a.overlaps(&Rect::from_cwh(30., 0., 40., 40.)));
        assert!(!a.overlaps(&Rect::from_cwh(100., 0., 40., 40.)));
        // edge contact is separation, not overlap
        assert!(!a.overlaps(&Rect::from_cwh(40., 0., 40., 40.)));
        assert!(a.overlaps(&Rect::from_cwh(39.99, 0., 40., 40.)));
        // separation on either axis is enough
        assert!(!a.overlaps(&Rect::from_cwh(0., 100., 40., 40.)));
    }

    #[test]
    fn test_too_close() {
        let a = Rect::from_cwh(0., 0., 40., 40.);
        // right edge of a at 20, left edge of b at 25: gap 5
        assert!(a.too_close(&Rect::from_cwh(45., 0., 40., 40.), 10.));
        assert!(!a.too_close(&Rect::from_cwh(60., 0., 40., 40.), 10.));
        // the metric compares raw edge coordinates per axis, so a large
        // vertical offset does not mask a small horizontal difference
        assert!(a.too_close(&Rect::from_cwh(45., 500., 40., 40.), 10.));
    }

    #[test]
    fn test_zero_size() {
        let r = Rect::from_cwh(5., 5., 0., 0.);
        assert_eq!(r.anchor(AnchorLoc::Top), Point::new(5., 5.));
        assert_eq!(r.anchor(AnchorLoc::Right), Point::new(5., 5.));
        assert!(r.contains(Point::new(5., 5.)));
        assert!(!r.contains(Point::new(5., 5.5)));
    }

    #[test]
    fn test_moved_to() {
        let r = Rect::from_cwh(0., 0., 40., 20.);
        let moved = r.moved_to(Point::new(7., -3.));
        assert_eq!(moved.position, Point::new(7., -3.));
        assert_eq!(moved.size, r.size);
    }
}
