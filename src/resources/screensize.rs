//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The scene layout and the
//! projectile bounds check read this.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
