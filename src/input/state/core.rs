//! Drawing surface state and configuration.

use crate::draw::{
    Color, Frame, InvalidColorError, RenderError, StrokePath, TRANSPARENT, render::fill_background,
};
use crate::util;
use thiserror::Error;

/// Gesture state machine.
///
/// `Idle -> (down) -> Active -> (up) -> Idle`. A second pointer-down while
/// active restarts the gesture; moves while active extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No pointer is down
    Idle,
    /// A gesture is in progress
    Active,
}

/// Errors surfaced while handling [`SurfaceEvent`](crate::input::SurfaceEvent)s.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error(transparent)]
    InvalidColor(#[from] InvalidColorError),

    #[error("Failed to reallocate backing store: {0}")]
    Render(#[from] RenderError),
}

/// Single-screen freehand drawing surface.
///
/// Owns the finalized strokes, the in-progress stroke, the undo discard list
/// and a blank raster backing store sized to the drawable area. Hosts forward
/// pointer events and call [`compose_frame`](Self::compose_frame) or
/// [`render`](Self::render) when `needs_redraw` is set.
///
/// The surface is meant to live on the thread that delivers input: it holds a
/// Cairo surface and is therefore not `Send`. Export work receives a
/// [`FrameSnapshot`](crate::draw::FrameSnapshot) instead.
pub struct DrawingSurface {
    /// Finalized strokes and undo discard list
    pub(crate) frame: Frame,
    /// Stroke being drawn by the current gesture
    pub(crate) current_path: StrokePath,
    /// Color applied at the next pointer-down
    current_color: Color,
    /// Thickness in pixels applied at the next pointer-down
    current_thickness: f64,
    /// Display density used for dp-to-pixel conversion
    density: f64,
    /// Current gesture state
    pub state: GestureState,
    /// Whether the host should repaint
    pub needs_redraw: bool,
    pub(crate) backing_store: cairo::ImageSurface,
}

impl DrawingSurface {
    /// Creates a surface of the given pixel size and display density.
    ///
    /// The initial color is black and the brush thickness is 0, which draws
    /// nothing: call [`set_brush_thickness`](Self::set_brush_thickness) before
    /// the first gesture.
    pub fn new(width: u32, height: u32, density: f64) -> Result<Self, RenderError> {
        let current_color = crate::draw::BLACK;
        Ok(Self {
            frame: Frame::new(),
            current_path: StrokePath::new(current_color, 0.0),
            current_color,
            current_thickness: 0.0,
            density,
            state: GestureState::Idle,
            needs_redraw: true,
            backing_store: create_backing_store(width, height)?,
        })
    }

    /// Sets the brush size in device-independent units.
    ///
    /// The value is converted to pixels with the surface's display density and
    /// used from the next gesture on.
    pub fn set_brush_thickness(&mut self, dp: f64) {
        self.current_thickness = util::dp_to_px(dp, self.density);
        log::debug!(
            "Brush thickness set to {:.1}dp ({:.1}px)",
            dp,
            self.current_thickness
        );
    }

    /// Parses `spec` (named or `#RRGGBB`/`#AARRGGBB`) and uses it for the next gesture.
    ///
    /// # Errors
    /// Returns [`InvalidColorError`] without touching the current color when the
    /// specification is not recognised.
    pub fn set_color(&mut self, spec: &str) -> Result<(), InvalidColorError> {
        let color = Color::parse(spec)?;
        self.set_color_value(color);
        Ok(())
    }

    /// Uses an already-parsed color for the next gesture.
    pub fn set_color_value(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Reallocates the backing store for a new drawable size.
    ///
    /// Stroke coordinates are kept in absolute pixels and are not rescaled.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.backing_store = create_backing_store(width, height)?;
        self.needs_redraw = true;
        log::debug!("Surface resized to {}x{}", width, height);
        Ok(())
    }

    /// Moves the most recent stroke to the discard list and requests a repaint.
    ///
    /// Does nothing when there are no finalized strokes.
    pub fn undo(&mut self) {
        if self.frame.undo() {
            self.needs_redraw = true;
            log::debug!("Undo: {} strokes remain", self.frame.strokes.len());
        }
    }

    /// Whether [`undo`](Self::undo) would remove a stroke.
    pub fn can_undo(&self) -> bool {
        self.frame.can_undo()
    }

    /// Finalized strokes in draw order.
    pub fn strokes(&self) -> &[StrokePath] {
        &self.frame.strokes
    }

    /// Strokes removed by undo, most recently removed last.
    pub fn discarded(&self) -> &[StrokePath] {
        self.frame.discarded()
    }

    /// The stroke being drawn by the current (or next) gesture.
    pub fn in_progress(&self) -> &StrokePath {
        &self.current_path
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Current brush thickness in pixels.
    pub fn current_thickness(&self) -> f64 {
        self.current_thickness
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn width(&self) -> i32 {
        self.backing_store.width()
    }

    pub fn height(&self) -> i32 {
        self.backing_store.height()
    }

    /// Allocates a fresh in-progress path tagged with the current configuration.
    pub(crate) fn fresh_path(&self) -> StrokePath {
        StrokePath::new(self.current_color, self.current_thickness)
    }
}

fn create_backing_store(width: u32, height: u32) -> Result<cairo::ImageSurface, RenderError> {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        fill_background(&ctx, TRANSPARENT)?;
    }
    Ok(surface)
}
