// src/animation/scale_state.rs
//
// Per-node animation progress. A node's scale travels one full unit away
// from its committed value, then snaps and commits. The direction toggles
// every cycle: 0 -> 1 on the way out, 1 -> 0 on the way back.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleUpdate {
    Idle,           // not animating, nothing changed
    InProgress,     // scale moved, not there yet
    Completed(f32), // snapped to the new committed scale
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleState {
    pub scale: f32,
    pub direction: f32,
    pub committed_scale: f32,
    step: f32,
}

impl ScaleState {
    pub fn new(step: f32) -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            committed_scale: 0.0,
            step,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.direction != 0.0
    }

    /// Advances the scale by one step in the current direction.
    pub fn update(&mut self) -> ScaleUpdate {
        if !self.is_animating() {
            return ScaleUpdate::Idle;
        }

        self.scale += self.step * self.direction;
        if (self.scale - self.committed_scale).abs() > 1.0 {
            self.scale = self.committed_scale + self.direction;
            self.direction = 0.0;
            self.committed_scale = self.scale;
            return ScaleUpdate::Completed(self.committed_scale);
        }
        ScaleUpdate::InProgress
    }

    /// Begins a cycle toward the opposite end. No-op while a cycle is running.
    pub fn start_updating(&mut self) -> StartOutcome {
        if self.is_animating() {
            return StartOutcome::AlreadyRunning;
        }
        self.direction = 1.0 - 2.0 * self.committed_scale;
        StartOutcome::Started
    }
}
