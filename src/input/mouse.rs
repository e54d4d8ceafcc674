use glam::Vec2;

/// Converts absolute cursor positions into motion deltas.
///
/// The first sample after creation (or after [`reset`](Self::reset)) only
/// records the position and yields no delta. Without the latch, the jump
/// from the stale last-position to the current cursor would register as a
/// huge spurious look delta. Also tracks whether a drag is in progress for
/// third-person rotation gating.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    first_sample: bool,
    last: Vec2,
    dragging: bool,
}

impl PointerTracker {
    /// Create a tracker with the first-sample latch armed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_sample: true,
            last: Vec2::ZERO,
            dragging: false,
        }
    }

    /// Re-arm the first-sample latch (on mode switches and drag starts).
    pub fn reset(&mut self) {
        self.first_sample = true;
    }

    /// Record an absolute cursor position and return the delta from the
    /// previous one, or `None` for the latched first sample.
    ///
    /// Deltas are raw screen-space: positive dy means the cursor moved down.
    /// Any sign convention for vertical look is applied downstream by the
    /// camera controller.
    pub fn track(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let current = Vec2::new(x, y);
        if self.first_sample {
            self.first_sample = false;
            self.last = current;
            return None;
        }
        let delta = current - self.last;
        self.last = current;
        Some(delta)
    }

    /// Mark a drag as started and re-arm the latch.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.reset();
    }

    /// Mark the drag as finished.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_yields_no_delta() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.track(100.0, 200.0), None);
        assert_eq!(
            tracker.track(110.0, 195.0),
            Some(Vec2::new(10.0, -5.0))
        );
    }

    #[test]
    fn reset_rearms_the_latch() {
        let mut tracker = PointerTracker::new();
        let _ = tracker.track(0.0, 0.0);
        let _ = tracker.track(5.0, 5.0);
        tracker.reset();
        // No spurious jump delta after the reset.
        assert_eq!(tracker.track(500.0, 500.0), None);
        assert_eq!(tracker.track(501.0, 500.0), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn drag_state_toggles_and_rearms() {
        let mut tracker = PointerTracker::new();
        let _ = tracker.track(0.0, 0.0);
        assert!(!tracker.is_dragging());
        tracker.begin_drag();
        assert!(tracker.is_dragging());
        assert_eq!(tracker.track(50.0, 50.0), None);
        tracker.end_drag();
        assert!(!tracker.is_dragging());
    }
}
