use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its frame size in pixels and an
/// offset selecting the current frame inside the spritesheet strip.
/// Rendering centers the sprite on the entity's `MapPosition`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            flip_h: false,
        }
    }
}
