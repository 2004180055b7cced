//! Motion constraints for draggable dialogs.
//!
//! A dialog may be dragged partly off-screen but not lost: once its
//! position is outside the bounds, only moves that head back toward the
//! bounds are allowed. The DOM wiring lives in [`crate::ui`].

/// Bounds within which a dialog may move freely, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLimits {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for DragLimits {
    /// Defaults tuned for the editor's dialog sizes: a dialog may hang up
    /// to 250px off the left edge and travel to (600, 400) right/down.
    fn default() -> Self {
        DragLimits {
            min_x: -250.0,
            min_y: 0.0,
            max_x: 600.0,
            max_y: 400.0,
        }
    }
}

/// Per-drag state deciding which moves to veto.
///
/// The previous position updates on every observed move, vetoed or not, so
/// a dialog stuck out of bounds can always be dragged back in.
#[derive(Debug, Clone)]
pub struct DragTracker {
    limits: DragLimits,
    prev_x: f64,
    prev_y: f64,
}

impl DragTracker {
    #[must_use]
    pub fn new(limits: DragLimits) -> Self {
        DragTracker {
            limits,
            prev_x: 0.0,
            prev_y: 0.0,
        }
    }

    /// Whether a move to `(x, y)` should be applied.
    ///
    /// A move is vetoed when it is already outside a bound and travels
    /// further out in that direction.
    pub fn allows(&mut self, x: f64, y: f64) -> bool {
        let too_far_left = x < self.limits.min_x && x < self.prev_x;
        let too_far_right = x > self.limits.max_x && x > self.prev_x;
        let too_far_up = y < self.limits.min_y && y < self.prev_y;
        let too_far_down = y > self.limits.max_y && y > self.prev_y;

        self.prev_x = x;
        self.prev_y = y;

        !(too_far_left || too_far_right || too_far_up || too_far_down)
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        DragTracker::new(DragLimits::default())
    }
}
