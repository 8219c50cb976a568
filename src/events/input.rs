//! Mouse input event.

use bevy_ecs::prelude::Event;
use raylib::prelude::Vector2;

/// Left mouse button was pressed this frame at `pos` (screen space).
///
/// Consumed by `systems::quiz::click_observer`, which routes the click to
/// the key item, the prompter, or a visible NPC in that priority order.
#[derive(Event, Debug, Clone, Copy)]
pub struct ClickEvent {
    pub pos: Vector2,
}
