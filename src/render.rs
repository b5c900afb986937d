//! SVG rendering of a `Scene`: background grid, the two rectangles, and
//! the connector polyline.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::errors::{Error, Result};
use crate::fstr;
use crate::geometry::Rect;
use crate::scene::Scene;
use crate::RenderConfig;

const RECT_FILL: &str = "#409EF7";
const RECT_STROKE: &str = "#125CA2";
const GRID_STROKE: &str = "#CCCCCC";
const LINE_STROKE: &str = "black";

fn write_empty(writer: &mut Writer<&mut dyn Write>, el: BytesStart) -> Result<()> {
    writer.write_event(Event::Empty(el)).map_err(Error::from_err)
}

fn line_el(x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str) -> BytesStart<'static> {
    let mut el = BytesStart::new("line");
    el.push_attribute(("x1", fstr(x1).as_str()));
    el.push_attribute(("y1", fstr(y1).as_str()));
    el.push_attribute(("x2", fstr(x2).as_str()));
    el.push_attribute(("y2", fstr(y2).as_str()));
    el.push_attribute(("stroke", stroke));
    el.push_attribute(("stroke-width", "1"));
    el
}

fn rect_el(rect: &Rect) -> BytesStart<'static> {
    let mut el = BytesStart::new("rect");
    el.push_attribute(("x", fstr(rect.left()).as_str()));
    el.push_attribute(("y", fstr(rect.top()).as_str()));
    el.push_attribute(("width", fstr(rect.size.width).as_str()));
    el.push_attribute(("height", fstr(rect.size.height).as_str()));
    el.push_attribute(("fill", RECT_FILL));
    el.push_attribute(("stroke", RECT_STROKE));
    el.push_attribute(("stroke-width", "1"));
    el
}

/// Render the scene as an SVG document to the given writer.
pub fn render_scene(scene: &Scene, config: &RenderConfig, writer: &mut dyn Write) -> Result<()> {
    let (width, height) = config.canvas.as_wh();
    let mut writer = Writer::new(writer);

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("width", fstr(width).as_str()));
    svg.push_attribute(("height", fstr(height).as_str()));
    svg.push_attribute((
        "viewBox",
        format!("0 0 {} {}", fstr(width), fstr(height)).as_str(),
    ));
    writer
        .write_event(Event::Start(svg))
        .map_err(Error::from_err)?;

    if config.grid && config.grid_interval > 0. {
        let mut y = 0.;
        while y <= height {
            write_empty(&mut writer, line_el(0., y, width, y, GRID_STROKE))?;
            y += config.grid_interval;
        }
        let mut x = 0.;
        while x <= width {
            write_empty(&mut writer, line_el(x, 0., x, height, GRID_STROKE))?;
            x += config.grid_interval;
        }
    }

    write_empty(&mut writer, rect_el(&scene.first))?;
    write_empty(&mut writer, rect_el(&scene.second))?;

    let points = scene
        .connector()
        .iter()
        .map(|p| format!("{},{}", fstr(p.x), fstr(p.y)))
        .collect::<Vec<String>>()
        .join(" ");
    let mut polyline = BytesStart::new("polyline");
    polyline.push_attribute(("points", points.as_str()));
    polyline.push_attribute(("fill", "none"));
    polyline.push_attribute(("stroke", LINE_STROKE));
    polyline.push_attribute(("stroke-width", "1"));
    write_empty(&mut writer, polyline)?;

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(Error::from_err)?;
    Ok(())
}
