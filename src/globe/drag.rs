use glam::Vec2;

/// Where a drag gesture currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Coasting,
}

/// Pointer drag and momentum. Positions and deltas are in canvas backing pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub is_dragging: bool,
    pub last: Vec2,
    pub momentum: Vec2,
}

impl DragState {
    pub fn phase(&self) -> DragPhase {
        if self.is_dragging {
            DragPhase::Dragging
        } else if self.momentum != Vec2::ZERO {
            DragPhase::Coasting
        } else {
            DragPhase::Idle
        }
    }

    /// Pointer down: remember the anchor and drop any coasting.
    pub fn begin(&mut self, pos: Vec2) {
        self.is_dragging = true;
        self.last = pos;
        self.momentum = Vec2::ZERO;
    }

    /// Pointer move. Returns the delta since the previous sample while dragging;
    /// that delta also becomes the pending momentum.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.is_dragging {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.momentum = delta;
        Some(delta)
    }

    /// Pointer up: keep the last delta as momentum so the globe coasts.
    pub fn end(&mut self) {
        self.is_dragging = false;
    }

    /// Pointer left or was cancelled.
    pub fn cancel(&mut self) {
        self.end();
    }

    /// One frame of coasting.
    ///
    /// Returns the delta to apply this frame and decays the stored momentum.
    /// Once speed falls to `threshold` or below, momentum is zeroed and `None`
    /// is returned.
    pub fn coast(&mut self, decay: f32, threshold: f32) -> Option<Vec2> {
        if self.is_dragging {
            return None;
        }
        if self.momentum.length() > threshold {
            let step = self.momentum;
            self.momentum *= decay;
            Some(step)
        } else {
            self.momentum = Vec2::ZERO;
            None
        }
    }
}
