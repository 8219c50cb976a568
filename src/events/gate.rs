//! Gate collection event.

use bevy_ecs::prelude::{Entity, Event};

/// Request to collect `gate`.
///
/// Triggered by the player controller (jump press while in reach) and by the
/// animation system at the jump apex. The observer in `systems::gate`
/// applies the single-visible-NPC transaction.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollectEvent {
    pub gate: Entity,
}
