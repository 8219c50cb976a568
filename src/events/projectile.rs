//! Projectile launch event.

use bevy_ecs::prelude::Event;

/// Request to launch a projectile at `(x, y)` flying towards `direction`
/// (-1.0 left, +1.0 right).
///
/// Triggered by the animation system when the push animation reaches its
/// launch frame. Ignored by the observer while a projectile is in flight.
#[derive(Event, Debug, Clone, Copy)]
pub struct LaunchEvent {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
}
