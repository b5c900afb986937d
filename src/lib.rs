//! ## rectlink - draw orthogonal connectors between rectangles
//!
//! `rectlink` models a small diagram-editing document: two movable,
//! resizable rectangles joined by an orthogonal connector. The connector
//! leaves each rectangle perpendicular to its nearest edge midpoint and
//! bends at a single elbow, diverting around either rectangle when the
//! naive elbow would cut through it.
//!
//! The geometry core (`geometry`, `connector`) is pure: it consumes two
//! center-positioned rectangles and produces a polyline, with no knowledge
//! of rendering or input handling. Around it sit the hosting pieces:
//! `scene` (the two-rectangle document), `interact` (a pointer state
//! machine with overlap/clearance-guarded drag updates) and SVG output.
//!
//! ## Example
//!
//! ```
//! use rectlink::{RenderConfig, Scene};
//!
//! let scene = Scene::default();
//! let svg = rectlink::render_svg(&scene, &RenderConfig::default()).unwrap();
//!
//! assert!(svg.contains("<polyline"));
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "cli")]
pub mod cli;
pub mod connector;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod interact;
mod render;
pub mod scene;

pub use connector::{closest_anchors, connector_path, Anchor, Connection};
pub use errors::{Error, Result};
pub use geometry::{AnchorLoc, Point, Rect, Size};
pub use interact::{Interaction, PointerState};
pub use scene::{RectId, Scene};

// Allow users of this as a library to easily retrieve the version in use
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure a single scene render.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output canvas size in user units
    pub canvas: Size,
    /// Draw the background grid
    pub grid: bool,
    /// Spacing between grid lines (user units)
    pub grid_interval: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(constants::CANVAS_WIDTH, constants::CANVAS_HEIGHT),
            grid: true,
            grid_interval: constants::GRID_INTERVAL,
        }
    }
}

/// Render a scene to an SVG string.
pub fn render_svg(scene: &Scene, config: &RenderConfig) -> Result<String> {
    let mut output: Vec<u8> = vec![];
    render::render_scene(scene, config, &mut output)?;
    Ok(String::from_utf8(output).expect("Non-UTF8 output generated"))
}

/// Render a JSON scene document to an SVG string.
#[cfg(feature = "json")]
pub fn render_str(input: &str, config: &RenderConfig) -> Result<String> {
    let scene = Scene::from_json(input)?;
    render_svg(&scene, config)
}

/// Read a JSON scene from `reader` and write its SVG rendering to `writer`.
#[cfg(feature = "json")]
pub fn render_stream(
    reader: &mut dyn std::io::Read,
    writer: &mut dyn std::io::Write,
    config: &RenderConfig,
) -> Result<()> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let scene = Scene::from_json(&input)?;
    render::render_scene(&scene, config, writer)
}

/// Render a JSON scene file ('-' for stdin) to an SVG file ('-' for stdout).
#[cfg(feature = "cli")]
pub fn render_file(input_path: &str, output_path: &str, config: &RenderConfig) -> Result<()> {
    use std::io::{Read, Write};

    let mut input = String::new();
    if input_path == "-" {
        std::io::stdin().read_to_string(&mut input)?;
    } else {
        input = std::fs::read_to_string(input_path)?;
    }
    let output = render_str(&input, config)?;
    if output_path == "-" {
        std::io::stdout().write_all(output.as_bytes())?;
    } else {
        // Copy content rather than rename (via .persist()) since the temp
        // file could be on a different filesystem to the target path.
        let mut tmp = tempfile::NamedTempFile::new()?;
        tmp.write_all(output.as_bytes())?;
        std::fs::copy(tmp.path(), output_path)?;
    }
    Ok(())
}

/// Render a JSON scene string to SVG with default canvas settings.
#[cfg(feature = "json")]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn render_string(input: String, grid: bool) -> core::result::Result<String, String> {
    let config = RenderConfig {
        grid,
        ..Default::default()
    };
    render_str(&input, &config).map_err(|e| e.to_string())
}

/// Return a 'minimal' representation of the given number
pub(crate) fn fstr(x: f32) -> String {
    if x == (x as i32) as f32 {
        return (x as i32).to_string();
    }
    let result = format!("{x:.3}");
    if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.').into()
    } else {
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fstr() {
        assert_eq!(fstr(1.0), "1");
        assert_eq!(fstr(-100.0), "-100");
        assert_eq!(fstr(1.2345678), "1.235");
        assert_eq!(fstr(-1.2345678), "-1.235");
        assert_eq!(fstr(91.0004), "91");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_render_string() {
        let scene = Scene::default().to_json().expect("test");
        let svg = render_string(scene, false).expect("test");
        assert!(svg.contains("<polyline"));
        assert!(render_string("not json".to_string(), false).is_err());
    }
}
