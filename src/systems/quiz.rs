//! Quiz flow systems.
//!
//! - [`click_observer`] routes mouse clicks: the key item and the prompter
//!   toggle each other with priority over everything else, then a click on a
//!   visible NPC starts a quiz session (ignored while one is active).
//! - [`quiz_submit`] compares the trimmed answer on Enter and arms the
//!   feedback dismiss timer.
//! - [`update_dismiss_timers`] counts wall-clock time and fires
//!   [`QuizDismissEvent`]s.
//! - [`quiz_dismiss_observer`] ends the session, unless a newer session has
//!   replaced the one that armed the timer.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::tags::{HintKey, Npc, Prompter};
use crate::components::timer::DismissTimer;
use crate::events::input::ClickEvent;
use crate::events::quiz::QuizDismissEvent;
use crate::resources::input::InputState;
use crate::resources::quiz::{AnswerBox, QuizPhase, QuizSession, QuizTable};
use crate::resources::worldtime::WorldTime;

/// Seconds the feedback panel stays up before the session ends.
pub const FEEDBACK_SECONDS: f32 = 2.0;

/// Answer box offset from the NPC position.
const ANSWER_BOX_OFFSET: Vector2 = Vector2 { x: -50.0, y: 140.0 };

/// Start a session for `npc` with a uniformly random question.
///
/// No-op when a session is already active or the table is empty. Returns
/// whether a session was started.
pub fn start_session(
    session: &mut QuizSession,
    table: &QuizTable,
    answer_box: &mut AnswerBox,
    npc: Entity,
    npc_pos: Vector2,
) -> bool {
    if session.active {
        return false;
    }
    if table.questions.is_empty() {
        warn!("Quiz table is empty, not starting a session");
        return false;
    }
    let index = fastrand::usize(..table.questions.len());
    session.begin(npc, table.questions[index].clone());
    answer_box.open_at(npc_pos + ANSWER_BOX_OFFSET);
    debug!("Quiz session started for NPC {:?} (question {})", npc, index);
    true
}

/// Route a mouse click to the key item, the prompter, or a visible NPC.
pub fn click_observer(
    trigger: On<ClickEvent>,
    mut session: ResMut<QuizSession>,
    table: Res<QuizTable>,
    mut answer_box: ResMut<AnswerBox>,
    mut keys: Query<
        (&mut Actor, &MapPosition, &BoxCollider),
        (With<HintKey>, Without<Prompter>, Without<Npc>),
    >,
    mut prompters: Query<
        (&mut Actor, &MapPosition, &BoxCollider),
        (With<Prompter>, Without<HintKey>, Without<Npc>),
    >,
    npcs: Query<
        (Entity, &Actor, &MapPosition, &BoxCollider),
        (With<Npc>, Without<HintKey>, Without<Prompter>),
    >,
) {
    let point = trigger.event().pos;

    // Key/prompter toggles take priority and also work mid-quiz.
    if let Ok((mut key, position, collider)) = keys.single_mut() {
        if key.visible && collider.contains_point(position.pos, point) {
            key.visible = false;
            if let Ok((mut prompter, _, _)) = prompters.single_mut() {
                prompter.visible = true;
            }
            return;
        }
    }
    if let Ok((mut prompter, position, collider)) = prompters.single_mut() {
        if prompter.visible && collider.contains_point(position.pos, point) {
            prompter.visible = false;
            if let Ok((mut key, _, _)) = keys.single_mut() {
                key.visible = true;
            }
            return;
        }
    }

    if session.active {
        return;
    }

    for (entity, actor, position, collider) in npcs.iter() {
        if actor.visible
            && collider.contains_point(position.pos, point)
            && start_session(&mut session, &table, &mut answer_box, entity, position.pos)
        {
            break;
        }
    }
}

/// Compare the trimmed answer on Enter and move to the feedback phase.
pub fn quiz_submit(
    input: Res<InputState>,
    mut session: ResMut<QuizSession>,
    mut answer_box: ResMut<AnswerBox>,
    mut commands: Commands,
) {
    if !input.submit.just_pressed {
        return;
    }
    if !session.active || session.phase != QuizPhase::Asking {
        return;
    }
    let Some(question) = session.question.clone() else {
        return;
    };

    // Surrounding whitespace is forgiven; the comparison itself is exact.
    if answer_box.value.trim() == question.answer {
        session.feedback = question.correct_feedback.clone();
        session.correct = true;
    } else {
        session.feedback = question.wrong_feedback.clone();
        session.correct = false;
    }
    session.phase = QuizPhase::Feedback;
    answer_box.hide();
    commands.spawn(DismissTimer::new(FEEDBACK_SECONDS, session.generation));
}

/// Advance feedback dismiss timers and fire events on expiry.
pub fn update_dismiss_timers(
    time: Res<WorldTime>,
    mut timers: Query<(Entity, &mut DismissTimer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in timers.iter_mut() {
        timer.elapsed += time.delta;
        if timer.elapsed >= timer.duration {
            commands.trigger(QuizDismissEvent {
                generation: timer.generation,
            });
            commands.entity(entity).try_despawn();
        }
    }
}

/// End the session when a dismiss timer for its generation fires.
pub fn quiz_dismiss_observer(
    trigger: On<QuizDismissEvent>,
    mut session: ResMut<QuizSession>,
    mut answer_box: ResMut<AnswerBox>,
) {
    if !session.active || trigger.event().generation != session.generation {
        return;
    }
    session.end();
    answer_box.park();
}
