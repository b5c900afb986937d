mod rect;
mod types;

pub use rect::Rect;
pub use types::{AnchorLoc, Point, Size};
