use crate::draw::Point;
use crate::input::events::SurfaceEvent;

use super::{DrawingSurface, GestureState, SurfaceError};

impl DrawingSurface {
    /// Processes a pointer press.
    ///
    /// Tags the in-progress path with the current color and thickness, resets
    /// its geometry and starts it at `(x, y)`. A press during an active gesture
    /// drops the unfinished geometry without finalizing it.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if self.state == GestureState::Active {
            log::debug!("Pointer down during active gesture; restarting stroke");
        }
        self.current_path.color = self.current_color();
        self.current_path.thickness = self.current_thickness();
        self.current_path.start(Point::new(x, y));
        self.state = GestureState::Active;
        self.needs_redraw = true;
    }

    /// Processes pointer motion while pressed.
    ///
    /// Extends the in-progress path; ignored when no gesture has started.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.current_path.is_started() {
            return;
        }
        self.current_path.extend(Point::new(x, y));
        self.needs_redraw = true;
    }

    /// Processes a pointer release.
    ///
    /// Always finalizes the in-progress path, including a tap with no motion,
    /// then replaces it with a fresh empty path.
    pub fn on_pointer_up(&mut self) {
        let fresh = self.fresh_path();
        let finished = std::mem::replace(&mut self.current_path, fresh);
        log::debug!(
            "Stroke finalized with {} segments",
            finished.segments().len()
        );
        self.frame.add_stroke(finished);
        self.state = GestureState::Idle;
        self.needs_redraw = true;
    }

    /// Dispatches one host event to the matching operation.
    pub fn handle_event(&mut self, event: &SurfaceEvent) -> Result<(), SurfaceError> {
        match event {
            SurfaceEvent::Down { x, y } => self.on_pointer_down(*x, *y),
            SurfaceEvent::Move { x, y } => self.on_pointer_move(*x, *y),
            SurfaceEvent::Up => self.on_pointer_up(),
            SurfaceEvent::Undo => self.undo(),
            SurfaceEvent::Color { spec } => self.set_color(spec)?,
            SurfaceEvent::Brush { size } => self.set_brush_thickness(*size),
            SurfaceEvent::Resize { width, height } => self.on_resize(*width, *height)?,
        }
        Ok(())
    }
}
