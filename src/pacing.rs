//! Optional delay between rendered frames.
//!
//! Pacing only slows down observable progress output. It never changes what gets written.

use std::time::Duration;

use crate::foundation::core::FrameIndex;

/// Strategy consulted after each frame is rendered.
pub trait Pacer: Send + Sync {
    /// Called once per frame, after the frame has been appended.
    fn after_frame(&self, idx: FrameIndex);
}

/// No delay at all. Used by tests and the HTTP server.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn after_frame(&self, _idx: FrameIndex) {}
}

/// Sleep for a fixed duration after every frame.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Pacer for FixedDelay {
    fn after_frame(&self, _idx: FrameIndex) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}
