// SettingsPanel - core/transition.rs
//
// Slide left/right transition between two stack pages.
// Times are seconds on the caller's clock; offsets are in points.

/// Which way the pages move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// New page enters from the right (moving forward in stack order).
    Left,
    /// New page enters from the left (moving backward in stack order).
    Right,
}

/// An in-flight slide between two pages of the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
    started_at: f64,
    duration_secs: f64,
}

impl Transition {
    /// Start a transition. Returns `None` when there is nothing to animate:
    /// same page, or a zero duration.
    pub fn start(from: usize, to: usize, now: f64, duration_ms: u64) -> Option<Self> {
        if from == to || duration_ms == 0 {
            return None;
        }
        let direction = if to > from {
            SlideDirection::Left
        } else {
            SlideDirection::Right
        };
        Some(Self {
            from,
            to,
            direction,
            started_at: now,
            duration_secs: duration_ms as f64 / 1000.0,
        })
    }

    /// Linear progress clamped to [0, 1].
    pub fn linear_progress(&self, now: f64) -> f32 {
        (((now - self.started_at) / self.duration_secs).clamp(0.0, 1.0)) as f32
    }

    /// Eased progress (ease-out cubic).
    pub fn progress(&self, now: f64) -> f32 {
        let t = self.linear_progress(now);
        1.0 - (1.0 - t).powi(3)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= self.duration_secs
    }

    /// Horizontal offsets of the outgoing and incoming pages for a
    /// viewport of the given width.
    pub fn offsets(&self, width: f32, now: f64) -> (f32, f32) {
        let p = self.progress(now);
        match self.direction {
            SlideDirection::Left => (-width * p, width * (1.0 - p)),
            SlideDirection::Right => (width * p, -width * (1.0 - p)),
        }
    }
}
