//! Collectible gate hiding an NPC.
//!
//! Each gate keeps a stable [`Entity`] reference to the NPC it conceals.
//! Collecting a gate (see `systems::gate::collect_observer`) hides the gate,
//! reveals its NPC, and re-arms the gates of every other NPC so at most one
//! NPC is ever visible.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Debug, Clone)]
pub struct Gate {
    /// NPC revealed when this gate is collected.
    pub npc: Entity,
    pub visible: bool,
    /// Display width in pixels, used for the reach test.
    pub width: f32,
    pub scale: f32,
}

impl Gate {
    pub fn new(npc: Entity, width: f32) -> Self {
        Self {
            npc,
            visible: true,
            width,
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Whether an actor at `actor_x` is close enough to collect this gate.
    /// Invisible gates are never in reach.
    pub fn player_in_reach(&self, gate_x: f32, actor_x: f32) -> bool {
        self.visible && (actor_x - gate_x).abs() < 1.5 * self.width
    }
}
