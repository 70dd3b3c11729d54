//! Cairo-based rendering functions for strokes and base layers.

use super::color::Color;
use super::path::StrokePath;

/// Paints the backing store at the origin of the target context.
///
/// Should be called first when composing a frame, before any stroke.
pub fn render_backing_store(
    ctx: &cairo::Context,
    backing_store: &cairo::ImageSurface,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_source_surface(backing_store, 0.0, 0.0)?;
    ctx.paint()?;
    ctx.restore()
}

/// Fills the entire target with a solid color, replacing whatever was there.
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.paint()?;
    ctx.restore()
}

/// Renders all strokes in order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[StrokePath]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke as a round-capped, round-joined polyline.
///
/// Uses the stroke's own color and thickness. A path holding only its starting
/// point produces no pixels.
pub fn render_stroke(ctx: &cairo::Context, stroke: &StrokePath) {
    let Some(origin) = stroke.origin() else {
        return;
    };

    let color = stroke.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke.thickness);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(origin.x, origin.y);
    for point in stroke.segments() {
        ctx.line_to(point.x, point.y);
    }

    // A failed stroke leaves this layer empty; the rest of the frame still renders
    if let Err(err) = ctx.stroke() {
        log::warn!("Failed to stroke path: {}", err);
    }
}
