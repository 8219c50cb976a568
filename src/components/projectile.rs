//! Pooled projectile slot.
//!
//! Projectile entities are spawned once at scene setup and reused. A slot is
//! inactive until a launch event claims it; while any slot is active further
//! launches are ignored, so at most one projectile is in flight.

use bevy_ecs::prelude::Component;

use crate::components::actor::DEFAULT_DIVISOR;

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub active: bool,
    /// -1.0 flying left, +1.0 flying right.
    pub direction: f32,
    /// Pixels per tick.
    pub speed: f32,
    pub scale: f32,
    /// Ticks per animation frame.
    pub divisor: u64,
    /// Frame-set key for the spinning tool animation.
    pub frame_set: String,
}

impl Projectile {
    pub fn new(frame_set: impl Into<String>, speed: f32, scale: f32) -> Self {
        Self {
            active: false,
            direction: 1.0,
            speed,
            scale,
            divisor: DEFAULT_DIVISOR,
            frame_set: frame_set.into(),
        }
    }
}
