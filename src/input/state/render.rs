use crate::draw::{FrameSnapshot, RenderError, render_backing_store, render_stroke, render_strokes};

use super::DrawingSurface;

impl DrawingSurface {
    /// Paints the full frame into a host-provided Cairo context.
    ///
    /// Draw order: backing store, finalized strokes in insertion order (each
    /// with its own color and thickness), then the in-progress stroke if it has
    /// any segments. Later strokes cover earlier ones where they overlap.
    pub fn render(&self, ctx: &cairo::Context) -> Result<(), cairo::Error> {
        render_backing_store(ctx, &self.backing_store)?;
        render_strokes(ctx, &self.frame.strokes);
        if !self.current_path.is_empty() {
            render_stroke(ctx, &self.current_path);
        }
        Ok(())
    }

    /// Renders the current frame into an owned snapshot of the surface's size.
    ///
    /// The snapshot owns its pixels and can be handed to another thread for
    /// encoding while the surface keeps receiving input.
    pub fn compose_frame(&self) -> Result<FrameSnapshot, RenderError> {
        let target =
            cairo::ImageSurface::create(cairo::Format::ARgb32, self.width(), self.height())?;
        {
            let ctx = cairo::Context::new(&target)?;
            self.render(&ctx)?;
        }
        FrameSnapshot::from_surface(target)
    }
}
