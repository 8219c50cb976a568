//! Actor animation system.
//!
//! [`actor_animation`] advances every actor's animation once per tick and
//! writes the visible frame into its [`Sprite`]. Idle and Walking derive
//! their frame from the global frame counter; Jumping and Pushing advance a
//! stored cursor every `divisor` ticks and return to Idle on completion.
//!
//! Two gameplay hooks live here because they are keyed to animation frames:
//! - at the jump apex, every gate is tested for horizontal reach and aligned
//!   gates get a [`CollectEvent`];
//! - on the push launch frame, a [`LaunchEvent`] is triggered if no
//!   projectile is in flight.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::actor::{Actor, ActorState, Facing, LAUNCH_OFFSET, PUSH_LAUNCH_FRAME};
use crate::components::gate::Gate;
use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::components::sprite::Sprite;
use crate::events::gate::CollectEvent;
use crate::events::projectile::LaunchEvent;
use crate::resources::framesetstore::FrameSetStore;
use crate::resources::worldtime::WorldTime;

/// Advance actor animations and fire frame-keyed gameplay events.
///
/// Contract
/// - Reads [`WorldTime`] for the global frame counter.
/// - Looks up frame data from [`FrameSetStore`]; actors referencing a
///   missing set are skipped with a warning.
/// - Mutates [`Actor`] cursors/state/lift and the [`Sprite`] frame.
pub fn actor_animation(
    time: Res<WorldTime>,
    frame_sets: Res<FrameSetStore>,
    mut actors: Query<(&mut Actor, &MapPosition, &mut Sprite)>,
    gates: Query<(Entity, &Gate, &MapPosition), Without<Actor>>,
    projectiles: Query<&Projectile>,
    mut commands: Commands,
) {
    for (mut actor, position, mut sprite) in actors.iter_mut() {
        let Some(set) = actor.frame_set_key().and_then(|key| frame_sets.get(key)) else {
            warn!(
                "No frame set for actor state {:?} (keys: {:?}), skipping",
                actor.state,
                actor.frame_sets.keys().collect::<Vec<_>>()
            );
            continue;
        };
        let len = set.frame_count;
        let advance = time.frame_count % actor.divisor == 0;

        match actor.state {
            ActorState::Idle | ActorState::Walking => {
                actor.jump_lift = 0.0;
                let frame = Actor::looping_frame(time.frame_count, actor.divisor, len);
                sprite.offset = set.frame_offset(frame);
            }
            ActorState::Jumping => {
                let cursor = actor.jump_cursor.min(len - 1);
                actor.jump_lift = Actor::jump_lift_at(cursor, len);
                sprite.offset = set.frame_offset(cursor);

                // Apex: collect every aligned, visible gate. Collecting
                // hides the gate, so re-checks on later apex ticks no-op.
                if cursor == Actor::apex_frame(len) {
                    for (gate_entity, gate, gate_position) in gates.iter() {
                        if gate.player_in_reach(gate_position.pos.x, position.pos.x) {
                            commands.trigger(CollectEvent { gate: gate_entity });
                        }
                    }
                }

                if advance {
                    actor.jump_cursor += 1;
                }
                if actor.jump_cursor >= len {
                    actor.state = ActorState::Idle;
                    actor.jump_cursor = 0;
                    actor.jump_lift = 0.0;
                }
            }
            ActorState::Pushing => {
                let cursor = actor.push_cursor.min(len - 1);
                sprite.offset = set.frame_offset(cursor);

                if cursor == PUSH_LAUNCH_FRAME && !projectiles.iter().any(|p| p.active) {
                    commands.trigger(LaunchEvent {
                        x: position.pos.x + LAUNCH_OFFSET * actor.facing.sign(),
                        y: position.pos.y,
                        direction: actor.facing.sign(),
                    });
                }

                if advance {
                    actor.push_cursor += 1;
                }
                if actor.push_cursor >= len {
                    actor.state = ActorState::Idle;
                    actor.push_cursor = 0;
                }
            }
        }

        // The four states may live in different textures with different
        // frame sizes, so the sprite follows the active set.
        if sprite.tex_key != set.tex_key {
            sprite.tex_key = set.tex_key.clone();
        }
        sprite.width = set.frame_width;
        sprite.height = set.frame_height;
        sprite.flip_h = actor.facing == Facing::Left;
    }
}
