//! Player controller.
//!
//! Translates the per-frame [`InputState`] into actor state transitions and
//! walking movement. A jump press while standing in reach of a visible gate
//! collects the gate instead of jumping.

use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, ActorState, Facing};
use crate::components::gate::Gate;
use crate::components::mapposition::MapPosition;
use crate::components::tags::Player;
use crate::events::gate::CollectEvent;
use crate::resources::input::InputState;

pub fn player_controller(
    input: Res<InputState>,
    mut players: Query<(&mut Actor, &mut MapPosition), With<Player>>,
    gates: Query<(Entity, &Gate, &MapPosition), Without<Player>>,
    mut commands: Commands,
) {
    let Ok((mut actor, mut position)) = players.single_mut() else {
        return;
    };

    // Walking. Held movement keys are ignored while an action animation
    // plays; release drops back to idle.
    if actor.can_act() {
        if input.walk_right.active {
            actor.state = ActorState::Walking;
            actor.facing = Facing::Right;
            position.pos.x += actor.speed;
        } else if input.walk_left.active {
            actor.state = ActorState::Walking;
            actor.facing = Facing::Left;
            position.pos.x -= actor.speed;
        } else if actor.state == ActorState::Walking {
            actor.state = ActorState::Idle;
        }
    }

    // Jump, or collect when a visible gate is in reach.
    if input.jump.just_pressed && actor.can_act() {
        let mut collected = false;
        for (gate_entity, gate, gate_position) in gates.iter() {
            if gate.player_in_reach(gate_position.pos.x, position.pos.x) {
                commands.trigger(CollectEvent { gate: gate_entity });
                collected = true;
                break;
            }
        }
        if !collected {
            actor.begin_jump();
        }
    }

    if input.attack.just_pressed && actor.can_act() {
        actor.begin_push();
    }
}
