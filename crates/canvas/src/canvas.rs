//! Console output surface and drawing traversal.
//!
//! A [`Canvas`] wraps the report sink and exposes the drawing operations:
//! group markers, the position setter, and the per-shape renderers. Every
//! magnitude is clamped here, at the last point before it is reported, and
//! a clamp emits its notice line ahead of the operation's own line.
//!
//! [`render_drawing`] is the traversal entry point: one sequential pass
//! over a drawing's groups, in order, nothing retained between elements.

use std::io::{self, Write};

use log::debug;
use primitive::{clamp_dimension, Primitive, Shape};
use scene::Drawing;

/// Output surface for a drawing run.
///
/// Holds no shape state; the sink receives the full report stream. Writing
/// to a `Vec<u8>` sink gives a capturable transcript.
pub struct Canvas<W: Write> {
    sink: W,
}

impl<W: Write> Canvas<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Consume the canvas and hand back the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Mark the start of a group's elements.
    pub fn begin_group(&mut self) -> io::Result<()> {
        writeln!(self.sink, "start group:")
    }

    /// Mark the end of a group's elements, with a separating blank line.
    pub fn end_group(&mut self) -> io::Result<()> {
        writeln!(self.sink, "end group")?;
        writeln!(self.sink)
    }

    /// Move the draw cursor, clamping each coordinate independently.
    pub fn set_position(&mut self, x: f32, y: f32) -> io::Result<()> {
        let x = self.clamp(x)?;
        let y = self.clamp(y)?;
        writeln!(self.sink, "setting position: x = {x}, y = {y}")
    }

    /// Report a rectangle, clamping both dimensions.
    pub fn draw_rect(&mut self, length: f32, width: f32) -> io::Result<()> {
        let length = self.clamp(length)?;
        let width = self.clamp(width)?;
        writeln!(self.sink, "drawing rect: {length} × {width}")
    }

    /// Report a circle, clamping the radius.
    pub fn draw_circle(&mut self, radius: f32) -> io::Result<()> {
        let radius = self.clamp(radius)?;
        writeln!(self.sink, "drawing circle: {radius}")
    }

    fn clamp(&mut self, val: f32) -> io::Result<f32> {
        let clamped = clamp_dimension(val);
        if clamped != val {
            writeln!(self.sink, "clamping {val} to range")?;
        }
        Ok(clamped)
    }
}

/// Render a whole drawing onto `canvas`: every group in order, every
/// element within its group in order, one pass.
pub fn render_drawing<W: Write>(drawing: &Drawing, canvas: &mut Canvas<W>) -> io::Result<()> {
    debug!(
        "rendering {} groups, {} elements",
        drawing.groups.len(),
        drawing.element_count()
    );
    for group in &drawing.groups {
        canvas.begin_group()?;
        for primitive in &group.primitives {
            draw_primitive(primitive, canvas)?;
        }
        canvas.end_group()?;
    }
    Ok(())
}

/// Place and draw a single primitive: position first, then the shape.
pub fn draw_primitive<W: Write>(primitive: &Primitive, canvas: &mut Canvas<W>) -> io::Result<()> {
    canvas.set_position(primitive.position.x(), primitive.position.y())?;
    match primitive.shape {
        Shape::Rect { length, width } => canvas.draw_rect(length, width),
        Shape::Circle { radius } => canvas.draw_circle(radius),
    }
}
