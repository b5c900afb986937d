use std::fmt;
use std::str::FromStr;

#[cfg(feature = "json")]
use serde_derive::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A 2D coordinate in user units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn dist(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_wh(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// `AnchorLoc` identifies an edge midpoint of a `Rect`.
///
/// The order of `ALL` matters: anchor-pair selection scans it in order
/// and keeps the earliest pair on an exact distance tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorLoc {
    Top,
    Bottom,
    Left,
    Right,
}

impl AnchorLoc {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Outward edge normal as a unit (dx, dy) pair
    pub const fn normal(&self) -> (f32, f32) {
        match self {
            Self::Top => (0., -1.),
            Self::Bottom => (0., 1.),
            Self::Left => (-1., 0.),
            Self::Right => (1., 0.),
        }
    }
}

impl fmt::Display for AnchorLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Top => "t",
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AnchorLoc {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "t" | "top" => Ok(Self::Top),
            "b" | "bottom" => Ok(Self::Bottom),
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(Error::Parse(format!("invalid AnchorLoc format {value}"))),
        }
    }
}
