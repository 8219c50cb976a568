//! Gate collection observer.
//!
//! Applies the collect transaction: hide the gate, reveal its NPC, and for
//! every other NPC hide it again and re-arm its gate. After any collect
//! exactly one NPC is visible and each NPC's gate visibility is the
//! complement of its NPC's visibility.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::components::actor::Actor;
use crate::components::gate::Gate;
use crate::components::tags::Npc;
use crate::events::gate::CollectEvent;
use crate::resources::quiz::{AnswerBox, QuizSession};

pub fn collect_observer(
    trigger: On<CollectEvent>,
    mut session: ResMut<QuizSession>,
    mut answer_box: ResMut<AnswerBox>,
    mut gates: Query<(Entity, &mut Gate)>,
    mut npcs: Query<(Entity, &mut Actor), With<Npc>>,
) {
    let collected = trigger.event().gate;

    let revealed = {
        let Ok((_, mut gate)) = gates.get_mut(collected) else {
            warn!("CollectEvent for unknown gate {:?}", collected);
            return;
        };
        // A second event for the same gate in one frame is a no-op.
        if !gate.visible {
            return;
        }
        gate.visible = false;
        gate.npc
    };
    debug!("Gate {:?} collected, revealing NPC {:?}", collected, revealed);

    // A running quiz belongs to whichever NPC is about to be hidden.
    if session.active {
        session.end();
        answer_box.park();
    }

    if let Ok((_, mut npc)) = npcs.get_mut(revealed) {
        npc.visible = true;
    } else {
        warn!("Gate {:?} references missing NPC {:?}", collected, revealed);
    }

    // Snapshot the other NPCs before mutating anything else.
    let others: SmallVec<[Entity; 4]> = npcs
        .iter()
        .filter(|(entity, _)| *entity != revealed)
        .map(|(entity, _)| entity)
        .collect();

    for other in others {
        if let Ok((_, mut actor)) = npcs.get_mut(other) {
            actor.visible = false;
        }
        // Re-arm the first gate associated with this NPC.
        for (_, mut gate) in gates.iter_mut() {
            if gate.npc == other {
                gate.visible = true;
                break;
            }
        }
    }
}
