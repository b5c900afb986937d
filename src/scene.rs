//! The editable document: exactly two rectangles plus the connector
//! between them.

#[cfg(feature = "json")]
use serde_derive::{Deserialize, Serialize};

use crate::connector::connector_path;
use crate::constants::MIN_CLEARANCE;
#[cfg(feature = "json")]
use crate::errors::Result;
use crate::geometry::{Point, Rect, Size};

/// Identifies one of the scene's two rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectId {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Scene {
    pub first: Rect,
    pub second: Rect,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            first: Rect::new(Point::new(600., 200.), Size::new(40., 40.)),
            second: Rect::new(Point::new(800., 200.), Size::new(80., 80.)),
        }
    }
}

impl Scene {
    pub fn new(first: Rect, second: Rect) -> Self {
        Self { first, second }
    }

    pub fn rect(&self, id: RectId) -> &Rect {
        match id {
            RectId::First => &self.first,
            RectId::Second => &self.second,
        }
    }

    pub fn rect_mut(&mut self, id: RectId) -> &mut Rect {
        match id {
            RectId::First => &mut self.first,
            RectId::Second => &mut self.second,
        }
    }

    fn other(&self, id: RectId) -> &Rect {
        match id {
            RectId::First => &self.second,
            RectId::Second => &self.first,
        }
    }

    /// The rectangle under the given point, if any.
    ///
    /// The first rectangle takes priority when both contain the point.
    pub fn rect_at(&self, p: Point) -> Option<RectId> {
        if self.first.contains(p) {
            Some(RectId::First)
        } else if self.second.contains(p) {
            Some(RectId::Second)
        } else {
            None
        }
    }

    /// The connector polyline between the two rectangles
    pub fn connector(&self) -> Vec<Point> {
        connector_path(&self.first, &self.second)
    }

    /// Whether moving `id` so its center is at `center` would overlap the
    /// other rectangle or bring it within the minimum clearance.
    pub fn placement_blocked(&self, id: RectId, center: Point) -> bool {
        let moved = self.rect(id).moved_to(center);
        let other = self.other(id);
        moved.overlaps(other) || moved.too_close(other, MIN_CLEARANCE)
    }

    #[cfg(feature = "json")]
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
