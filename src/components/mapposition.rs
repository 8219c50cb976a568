use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity. The position is the pivot point used
/// for rendering, reach tests and click hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
