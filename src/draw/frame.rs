//! Frame container for finalized strokes and the undo discard list.

use super::path::StrokePath;

/// All strokes finalized during a drawing session.
///
/// Every finalized stroke lives in exactly one of two lists: `strokes` (drawn,
/// first = bottom layer, last = top layer) or the discard list it was moved to by
/// [`undo`](Self::undo). Discarded strokes are never drawn or replayed.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Strokes in draw order
    pub strokes: Vec<StrokePath>,
    discarded: Vec<StrokePath>,
}

impl Frame {
    /// Creates a new empty frame with no strokes.
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
            discarded: Vec::new(),
        }
    }

    /// Adds a finalized stroke on top of existing strokes.
    pub fn add_stroke(&mut self, stroke: StrokePath) {
        self.strokes.push(stroke);
    }

    /// Moves the most recently added stroke to the discard list.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(stroke) => {
                self.discarded.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Whether [`undo`](Self::undo) would remove anything.
    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    /// Strokes removed by undo, most recently removed last.
    pub fn discarded(&self) -> &[StrokePath] {
        &self.discarded
    }
}
