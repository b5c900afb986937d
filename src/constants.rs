//! Constants used throughout rectlink

/// Length of the perpendicular lead-out stub extending from each anchor
pub const STUB_OFFSET: f32 = 5.;

/// Minimum edge-to-edge clearance enforced while dragging a rectangle
pub const MIN_CLEARANCE: f32 = 10.;

/// Default canvas width in user units
pub const CANVAS_WIDTH: f32 = 800.;
/// Default canvas height in user units
pub const CANVAS_HEIGHT: f32 = 600.;

/// Default spacing between background grid lines
pub const GRID_INTERVAL: f32 = 20.;
