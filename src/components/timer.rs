//! Countdown timer for quiz feedback dismissal.

use bevy_ecs::prelude::Component;

/// Counts up to `duration` seconds and then fires a dismiss event.
///
/// The `generation` records which quiz session armed the timer. A session
/// that ended and restarted before the timer fires has a newer generation,
/// so the stale timer is ignored instead of tearing down the new session.
#[derive(Component, Debug, Clone, Copy)]
pub struct DismissTimer {
    pub duration: f32,
    pub elapsed: f32,
    pub generation: u64,
}

impl DismissTimer {
    pub fn new(duration: f32, generation: u64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            generation,
        }
    }
}
