//! Scene tick integration tests for the player state machine, gates,
//! quiz sessions and the projectile pool.

#![allow(dead_code, unused_imports)]

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use quizstage::components::actor::{Actor, ActorState, Facing};
use quizstage::components::boxcollider::BoxCollider;
use quizstage::components::gate::Gate;
use quizstage::components::mapposition::MapPosition;
use quizstage::components::projectile::Projectile;
use quizstage::components::sprite::Sprite;
use quizstage::components::tags::{HintKey, Npc, Player, Prompter};
use quizstage::components::timer::DismissTimer;
use quizstage::events::gate::CollectEvent;
use quizstage::events::input::ClickEvent;
use quizstage::resources::framesetstore::{FrameSet, FrameSetStore};
use quizstage::resources::input::InputState;
use quizstage::resources::quiz::{AnswerBox, QuizPhase, QuizQuestion, QuizSession, QuizTable};
use quizstage::resources::screensize::ScreenSize;
use quizstage::resources::worldtime::WorldTime;
use quizstage::systems::actor::actor_animation;
use quizstage::systems::gate::collect_observer;
use quizstage::systems::player::player_controller;
use quizstage::systems::projectile::{launch_observer, projectile_flight};
use quizstage::systems::quiz::{
    click_observer, quiz_dismiss_observer, quiz_submit, start_session, update_dismiss_timers,
};
use quizstage::systems::time::update_world_time;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn sample_frame_sets() -> FrameSetStore {
    let mut store = FrameSetStore::default();
    store.insert("idle", FrameSet::new("idle", 24, 10.0, 10.0));
    store.insert("walk", FrameSet::new("walk", 12, 10.0, 10.0));
    store.insert("jump", FrameSet::new("jump", 21, 10.0, 10.0));
    store.insert("push", FrameSet::new("push", 17, 10.0, 10.0));
    store.insert("tool", FrameSet::new("tool", 15, 10.0, 10.0));
    store.insert("gift", FrameSet::new("gift", 1, 40.0, 40.0));
    store
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: 0.0,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(InputState::default());
    world.insert_resource(QuizSession::default());
    world.insert_resource(AnswerBox::default());
    world.insert_resource(sample_frame_sets());
    world
}

fn question() -> QuizQuestion {
    QuizQuestion {
        question: "2 + 2?".to_string(),
        answer: "4".to_string(),
        correct_feedback: "Right!".to_string(),
        wrong_feedback: "Nope".to_string(),
        hint: "Count on your fingers".to_string(),
    }
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Player,
            Actor::new(2.25)
                .with_speed(5.0)
                .with_frame_set(ActorState::Idle, "idle")
                .with_frame_set(ActorState::Walking, "walk")
                .with_frame_set(ActorState::Jumping, "jump")
                .with_frame_set(ActorState::Pushing, "push"),
            MapPosition::new(x, y),
            Sprite::new("idle", 10.0, 10.0),
        ))
        .id()
}

/// NPC hidden behind a visible gate. Gate width 90 puts the reach
/// threshold at 135 pixels.
fn spawn_npc_with_gate(world: &mut World, x: f32) -> (Entity, Entity) {
    let npc = world
        .spawn((
            Npc,
            Actor::new(1.35)
                .with_frame_set(ActorState::Idle, "idle")
                .hidden(),
            MapPosition::new(x, 150.0),
            Sprite::new("idle", 10.0, 10.0),
            BoxCollider::centered(100.0, 150.0),
        ))
        .id();
    let gate = world
        .spawn((
            Gate::new(npc, 90.0),
            MapPosition::new(x, 150.0),
            Sprite::new("gift", 40.0, 40.0),
        ))
        .id();
    (npc, gate)
}

fn spawn_projectile_slot(world: &mut World) -> Entity {
    world
        .spawn((
            Projectile::new("tool", 10.0, 2.25),
            MapPosition::new(-2000.0, -2000.0),
            Sprite::new("tool", 10.0, 10.0),
        ))
        .id()
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(actor_animation);
    schedule.run(world);
}

fn tick_player(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);
    schedule.run(world);
}

fn tick_flight(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(projectile_flight);
    schedule.run(world);
}

fn tick_quiz_submit(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(quiz_submit);
    schedule.run(world);
}

fn tick_dismiss_timers(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_dismiss_timers);
    schedule.run(world);
}

/// Advance the clock and the animation system `ticks` times at 60 fps.
fn advance_animation(world: &mut World, ticks: usize) {
    for _ in 0..ticks {
        update_world_time(world, 1.0 / 60.0);
        tick_animation(world);
    }
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn idle_frame_derives_from_frame_counter() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);

    // frame = (frame_count / 4) % 24, frames are 10px wide
    advance_animation(&mut world, 4);
    let sprite = world.get::<Sprite>(player).unwrap();
    assert!(approx_eq(sprite.offset.x, 10.0));

    advance_animation(&mut world, 92); // frame_count 96 wraps to frame 0
    let sprite = world.get::<Sprite>(player).unwrap();
    assert!(approx_eq(sprite.offset.x, 0.0));
}

#[test]
fn jump_lift_peaks_at_apex_tick() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);
    world.get_mut::<Actor>(player).unwrap().begin_jump();

    // Cursor reaches the apex (10 of 21) after 40 ticks; it is rendered on
    // the following tick.
    advance_animation(&mut world, 41);
    let actor = world.get::<Actor>(player).unwrap();
    assert_eq!(actor.state, ActorState::Jumping);
    assert!((actor.jump_lift - 200.0).abs() < 1e-3);
}

#[test]
fn jump_completes_back_to_idle() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);
    world.get_mut::<Actor>(player).unwrap().begin_jump();

    advance_animation(&mut world, 90);
    let actor = world.get::<Actor>(player).unwrap();
    assert_eq!(actor.state, ActorState::Idle);
    assert_eq!(actor.jump_cursor, 0);
    assert!(approx_eq(actor.jump_lift, 0.0));
}

#[test]
fn push_completes_back_to_idle() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);
    spawn_projectile_slot(&mut world);
    world.add_observer(launch_observer);
    world.flush();
    world.get_mut::<Actor>(player).unwrap().begin_push();

    advance_animation(&mut world, 70); // 17 frames x 4 ticks
    let actor = world.get::<Actor>(player).unwrap();
    assert_eq!(actor.state, ActorState::Idle);
    assert_eq!(actor.push_cursor, 0);
}

// =============================================================================
// Gates
// =============================================================================

#[test]
fn collect_reveals_npc_and_hides_gate() {
    let mut world = make_world();
    let (npc1, gate1) = spawn_npc_with_gate(&mut world, 200.0);
    let (npc2, gate2) = spawn_npc_with_gate(&mut world, 400.0);
    let (npc3, gate3) = spawn_npc_with_gate(&mut world, 600.0);
    world.add_observer(collect_observer);
    world.flush();

    world.trigger(CollectEvent { gate: gate1 });
    world.flush();

    assert!(world.get::<Actor>(npc1).unwrap().visible);
    assert!(!world.get::<Gate>(gate1).unwrap().visible);
    assert!(!world.get::<Actor>(npc2).unwrap().visible);
    assert!(world.get::<Gate>(gate2).unwrap().visible);
    assert!(!world.get::<Actor>(npc3).unwrap().visible);
    assert!(world.get::<Gate>(gate3).unwrap().visible);
}

#[test]
fn collect_keeps_exactly_one_npc_visible() {
    let mut world = make_world();
    let pairs = [
        spawn_npc_with_gate(&mut world, 200.0),
        spawn_npc_with_gate(&mut world, 400.0),
        spawn_npc_with_gate(&mut world, 600.0),
    ];
    world.add_observer(collect_observer);
    world.flush();

    world.trigger(CollectEvent { gate: pairs[0].1 });
    world.flush();
    world.trigger(CollectEvent { gate: pairs[1].1 });
    world.flush();

    let visible: Vec<bool> = pairs
        .iter()
        .map(|(npc, _)| world.get::<Actor>(*npc).unwrap().visible)
        .collect();
    assert_eq!(visible, vec![false, true, false]);

    // Gate visibility is always the complement of its NPC's visibility.
    for (npc, gate) in pairs {
        let npc_visible = world.get::<Actor>(npc).unwrap().visible;
        let gate_visible = world.get::<Gate>(gate).unwrap().visible;
        assert_ne!(npc_visible, gate_visible);
    }
    // The first gate was re-armed when its NPC went back into hiding.
    assert!(world.get::<Gate>(pairs[0].1).unwrap().visible);
}

#[test]
fn collect_ends_active_quiz_session() {
    let mut world = make_world();
    let (npc1, _gate1) = spawn_npc_with_gate(&mut world, 200.0);
    let (_npc2, gate2) = spawn_npc_with_gate(&mut world, 400.0);
    world.add_observer(collect_observer);
    world.flush();

    world.get_mut::<Actor>(npc1).unwrap().visible = true;
    world
        .resource_mut::<QuizSession>()
        .begin(npc1, question());
    world
        .resource_mut::<AnswerBox>()
        .open_at(Vector2 { x: 150.0, y: 290.0 });

    world.trigger(CollectEvent { gate: gate2 });
    world.flush();

    let session = world.resource::<QuizSession>();
    assert!(!session.active);
    assert!(session.question.is_none());
    let answer_box = world.resource::<AnswerBox>();
    assert!(!answer_box.visible);
    assert!(answer_box.value.is_empty());
}

// =============================================================================
// Player controller
// =============================================================================

#[test]
fn held_arrow_walks_and_faces() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);

    world.resource_mut::<InputState>().walk_right.active = true;
    tick_player(&mut world);
    tick_player(&mut world);
    tick_player(&mut world);

    let actor = world.get::<Actor>(player).unwrap();
    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!(actor.state, ActorState::Walking);
    assert_eq!(actor.facing, Facing::Right);
    assert!(approx_eq(pos.pos.x, 415.0));

    let mut input = world.resource_mut::<InputState>();
    input.walk_right.active = false;
    input.walk_left.active = true;
    tick_player(&mut world);

    let actor = world.get::<Actor>(player).unwrap();
    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!(actor.facing, Facing::Left);
    assert!(approx_eq(pos.pos.x, 410.0));

    world.resource_mut::<InputState>().walk_left.active = false;
    tick_player(&mut world);
    assert_eq!(world.get::<Actor>(player).unwrap().state, ActorState::Idle);
}

#[test]
fn jump_press_away_from_gates_jumps() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 700.0, 300.0);
    spawn_npc_with_gate(&mut world, 200.0);
    world.add_observer(collect_observer);
    world.flush();

    world.resource_mut::<InputState>().jump.just_pressed = true;
    tick_player(&mut world);

    assert_eq!(
        world.get::<Actor>(player).unwrap().state,
        ActorState::Jumping
    );
}

#[test]
fn jump_press_in_gate_reach_collects_instead() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 250.0, 300.0); // 50px from the gate
    let (npc, gate) = spawn_npc_with_gate(&mut world, 200.0);
    world.add_observer(collect_observer);
    world.flush();

    world.resource_mut::<InputState>().jump.just_pressed = true;
    tick_player(&mut world);

    assert_eq!(world.get::<Actor>(player).unwrap().state, ActorState::Idle);
    assert!(world.get::<Actor>(npc).unwrap().visible);
    assert!(!world.get::<Gate>(gate).unwrap().visible);
}

#[test]
fn input_is_ignored_during_action_animations() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);
    world.get_mut::<Actor>(player).unwrap().begin_jump();

    {
        let mut input = world.resource_mut::<InputState>();
        input.walk_right.active = true;
        input.attack.just_pressed = true;
    }
    tick_player(&mut world);

    let actor = world.get::<Actor>(player).unwrap();
    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!(actor.state, ActorState::Jumping);
    assert!(approx_eq(pos.pos.x, 400.0));
}

#[test]
fn apex_of_a_jump_collects_aligned_gate() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 300.0, 300.0); // 100px from the gate
    let (npc, gate) = spawn_npc_with_gate(&mut world, 200.0);
    world.add_observer(collect_observer);
    world.flush();

    world.get_mut::<Actor>(player).unwrap().begin_jump();
    advance_animation(&mut world, 45); // past the apex at cursor 10

    assert!(world.get::<Actor>(npc).unwrap().visible);
    assert!(!world.get::<Gate>(gate).unwrap().visible);
}

// =============================================================================
// Quiz sessions
// =============================================================================

#[test]
fn start_session_is_ignored_while_active() {
    fastrand::seed(42);
    let mut world = make_world();
    let (npc1, _) = spawn_npc_with_gate(&mut world, 200.0);
    let (npc2, _) = spawn_npc_with_gate(&mut world, 400.0);
    let table = QuizTable {
        questions: vec![question()],
    };

    let mut session = QuizSession::default();
    let mut answer_box = AnswerBox::default();
    assert!(start_session(
        &mut session,
        &table,
        &mut answer_box,
        npc1,
        Vector2 { x: 200.0, y: 150.0 }
    ));
    assert!(session.active);
    assert_eq!(session.npc, Some(npc1));
    assert_eq!(session.generation, 1);

    assert!(!start_session(
        &mut session,
        &table,
        &mut answer_box,
        npc2,
        Vector2 { x: 400.0, y: 150.0 }
    ));
    assert_eq!(session.npc, Some(npc1));
    assert_eq!(session.generation, 1);
}

#[test]
fn start_session_on_empty_table_is_a_noop() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);
    let table = QuizTable::default();
    let mut session = QuizSession::default();
    let mut answer_box = AnswerBox::default();

    assert!(!start_session(
        &mut session,
        &table,
        &mut answer_box,
        npc,
        Vector2 { x: 200.0, y: 150.0 }
    ));
    assert!(!session.active);
    assert!(!answer_box.visible);
}

#[test]
fn answer_box_opens_below_the_npc() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);
    let table = QuizTable {
        questions: vec![question()],
    };
    let mut session = QuizSession::default();
    let mut answer_box = AnswerBox::default();

    start_session(
        &mut session,
        &table,
        &mut answer_box,
        npc,
        Vector2 { x: 200.0, y: 150.0 },
    );
    assert!(answer_box.visible);
    assert!(answer_box.focused);
    assert!(approx_eq(answer_box.pos.x, 150.0));
    assert!(approx_eq(answer_box.pos.y, 290.0));
}

#[test]
fn correct_answer_shows_feedback_then_dismisses() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);
    world.add_observer(quiz_dismiss_observer);
    world.flush();

    {
        let mut session = world.resource_mut::<QuizSession>();
        session.begin(npc, question());
    }
    {
        let mut answer_box = world.resource_mut::<AnswerBox>();
        answer_box.open_at(Vector2 { x: 150.0, y: 290.0 });
        answer_box.value.push_str("  4  "); // surrounding whitespace trimmed
    }
    world.resource_mut::<InputState>().submit.just_pressed = true;
    tick_quiz_submit(&mut world);

    {
        let session = world.resource::<QuizSession>();
        assert!(session.active);
        assert_eq!(session.phase, QuizPhase::Feedback);
        assert!(session.correct);
        assert_eq!(session.feedback, "Right!");
        assert!(!world.resource::<AnswerBox>().visible);
    }

    // Feedback stays up for 2 seconds, then the session ends.
    for _ in 0..3 {
        update_world_time(&mut world, 0.5);
        tick_dismiss_timers(&mut world);
        assert!(world.resource::<QuizSession>().active);
    }
    update_world_time(&mut world, 0.5);
    tick_dismiss_timers(&mut world);

    let session = world.resource::<QuizSession>();
    assert!(!session.active);
    assert!(session.question.is_none());
}

#[test]
fn wrong_answer_shows_wrong_feedback() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);

    world.resource_mut::<QuizSession>().begin(npc, question());
    {
        let mut answer_box = world.resource_mut::<AnswerBox>();
        answer_box.open_at(Vector2 { x: 150.0, y: 290.0 });
        answer_box.value.push_str("5");
    }
    world.resource_mut::<InputState>().submit.just_pressed = true;
    tick_quiz_submit(&mut world);

    let session = world.resource::<QuizSession>();
    assert_eq!(session.phase, QuizPhase::Feedback);
    assert!(!session.correct);
    assert_eq!(session.feedback, "Nope");
}

#[test]
fn submit_is_ignored_during_feedback_phase() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);

    world.resource_mut::<QuizSession>().begin(npc, question());
    world
        .resource_mut::<AnswerBox>()
        .open_at(Vector2 { x: 150.0, y: 290.0 });
    world.resource_mut::<InputState>().submit.just_pressed = true;
    tick_quiz_submit(&mut world);
    assert_eq!(
        world.resource::<QuizSession>().phase,
        QuizPhase::Feedback
    );

    // A second Enter must not arm a second timer or change the feedback.
    tick_quiz_submit(&mut world);
    let mut timers = world.query::<&DismissTimer>();
    assert_eq!(timers.iter(&world).count(), 1);
}

#[test]
fn stale_dismiss_timer_cannot_end_newer_session() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);
    world.add_observer(quiz_dismiss_observer);
    world.flush();

    // First session arms a timer, then ends before it fires.
    let stale_generation = {
        let mut session = world.resource_mut::<QuizSession>();
        session.begin(npc, question());
        let generation = session.generation;
        session.end();
        generation
    };
    world.spawn(DismissTimer::new(0.1, stale_generation));

    // A new session is running when the stale timer fires.
    world.resource_mut::<QuizSession>().begin(npc, question());

    update_world_time(&mut world, 0.5);
    tick_dismiss_timers(&mut world);

    let session = world.resource::<QuizSession>();
    assert!(session.active);
    assert_eq!(session.generation, stale_generation + 1);
    // The stale timer is gone.
    let mut timers = world.query::<&DismissTimer>();
    assert_eq!(timers.iter(&world).count(), 0);
}

// =============================================================================
// Click routing
// =============================================================================

#[test]
fn click_on_visible_npc_starts_a_session() {
    fastrand::seed(7);
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);
    world.get_mut::<Actor>(npc).unwrap().visible = true;
    world.insert_resource(QuizTable {
        questions: vec![question()],
    });
    world.add_observer(click_observer);
    world.flush();

    world.trigger(ClickEvent {
        pos: Vector2 { x: 200.0, y: 150.0 },
    });
    world.flush();

    let session = world.resource::<QuizSession>();
    assert!(session.active);
    assert_eq!(session.npc, Some(npc));
    assert!(world.resource::<AnswerBox>().visible);
}

#[test]
fn click_on_hidden_npc_does_nothing() {
    let mut world = make_world();
    spawn_npc_with_gate(&mut world, 200.0); // NPC spawns hidden
    world.insert_resource(QuizTable {
        questions: vec![question()],
    });
    world.add_observer(click_observer);
    world.flush();

    world.trigger(ClickEvent {
        pos: Vector2 { x: 200.0, y: 150.0 },
    });
    world.flush();

    assert!(!world.resource::<QuizSession>().active);
}

#[test]
fn key_and_prompter_toggle_each_other() {
    let mut world = make_world();
    world.insert_resource(QuizTable {
        questions: vec![question()],
    });
    let key = world
        .spawn((
            HintKey,
            Actor::new(2.5).with_frame_set(ActorState::Idle, "idle"),
            MapPosition::new(650.0, 500.0),
            Sprite::new("idle", 10.0, 10.0),
            BoxCollider::centered(100.0, 100.0),
        ))
        .id();
    let prompter = world
        .spawn((
            Prompter,
            Actor::new(2.5)
                .with_frame_set(ActorState::Idle, "idle")
                .hidden(),
            MapPosition::new(500.0, 450.0),
            Sprite::new("idle", 10.0, 10.0),
            BoxCollider::centered(100.0, 100.0),
        ))
        .id();
    world.add_observer(click_observer);
    world.flush();

    world.trigger(ClickEvent {
        pos: Vector2 { x: 650.0, y: 500.0 },
    });
    world.flush();
    assert!(!world.get::<Actor>(key).unwrap().visible);
    assert!(world.get::<Actor>(prompter).unwrap().visible);

    world.trigger(ClickEvent {
        pos: Vector2 { x: 500.0, y: 450.0 },
    });
    world.flush();
    assert!(world.get::<Actor>(key).unwrap().visible);
    assert!(!world.get::<Actor>(prompter).unwrap().visible);
}

#[test]
fn key_toggle_works_during_active_quiz() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);
    world.get_mut::<Actor>(npc).unwrap().visible = true;
    world.insert_resource(QuizTable {
        questions: vec![question()],
    });
    let key = world
        .spawn((
            HintKey,
            Actor::new(2.5).with_frame_set(ActorState::Idle, "idle"),
            MapPosition::new(650.0, 500.0),
            Sprite::new("idle", 10.0, 10.0),
            BoxCollider::centered(100.0, 100.0),
        ))
        .id();
    let prompter = world
        .spawn((
            Prompter,
            Actor::new(2.5)
                .with_frame_set(ActorState::Idle, "idle")
                .hidden(),
            MapPosition::new(500.0, 450.0),
            Sprite::new("idle", 10.0, 10.0),
            BoxCollider::centered(100.0, 100.0),
        ))
        .id();
    world.add_observer(click_observer);
    world.flush();

    // Start a session by clicking the NPC.
    world.trigger(ClickEvent {
        pos: Vector2 { x: 200.0, y: 150.0 },
    });
    world.flush();
    let generation = world.resource::<QuizSession>().generation;
    assert!(world.resource::<QuizSession>().active);

    // The key still toggles the prompter mid-quiz, without touching the
    // running session.
    world.trigger(ClickEvent {
        pos: Vector2 { x: 650.0, y: 500.0 },
    });
    world.flush();
    assert!(!world.get::<Actor>(key).unwrap().visible);
    assert!(world.get::<Actor>(prompter).unwrap().visible);
    {
        let session = world.resource::<QuizSession>();
        assert!(session.active);
        assert_eq!(session.npc, Some(npc));
        assert_eq!(session.generation, generation);
    }
    assert!(world.resource::<AnswerBox>().visible);

    // And the prompter toggles back to the key.
    world.trigger(ClickEvent {
        pos: Vector2 { x: 500.0, y: 450.0 },
    });
    world.flush();
    assert!(world.get::<Actor>(key).unwrap().visible);
    assert!(!world.get::<Actor>(prompter).unwrap().visible);
    let session = world.resource::<QuizSession>();
    assert!(session.active);
    assert_eq!(session.generation, generation);
}

#[test]
fn click_with_empty_table_starts_nothing() {
    let mut world = make_world();
    let (npc, _) = spawn_npc_with_gate(&mut world, 200.0);
    world.get_mut::<Actor>(npc).unwrap().visible = true;
    world.insert_resource(QuizTable::default());
    world.add_observer(click_observer);
    world.flush();

    world.trigger(ClickEvent {
        pos: Vector2 { x: 200.0, y: 150.0 },
    });
    world.flush();

    assert!(!world.resource::<QuizSession>().active);
    assert!(!world.resource::<AnswerBox>().visible);
}

// =============================================================================
// Projectiles
// =============================================================================

#[test]
fn push_frame_launches_projectile_with_facing_offset() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);
    let slot = spawn_projectile_slot(&mut world);
    world.add_observer(launch_observer);
    world.flush();

    world.get_mut::<Actor>(player).unwrap().begin_push();
    advance_animation(&mut world, 29); // push cursor reaches frame 7

    let projectile = world.get::<Projectile>(slot).unwrap();
    let pos = world.get::<MapPosition>(slot).unwrap();
    assert!(projectile.active);
    assert!(approx_eq(projectile.direction, 1.0));
    assert!(approx_eq(pos.pos.x, 450.0));
    assert!(approx_eq(pos.pos.y, 300.0));
}

#[test]
fn push_facing_left_launches_left() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);
    let slot = spawn_projectile_slot(&mut world);
    world.add_observer(launch_observer);
    world.flush();

    {
        let mut actor = world.get_mut::<Actor>(player).unwrap();
        actor.facing = Facing::Left;
        actor.begin_push();
    }
    advance_animation(&mut world, 29);

    let projectile = world.get::<Projectile>(slot).unwrap();
    let pos = world.get::<MapPosition>(slot).unwrap();
    assert!(projectile.active);
    assert!(approx_eq(projectile.direction, -1.0));
    assert!(approx_eq(pos.pos.x, 350.0));
}

#[test]
fn second_push_while_in_flight_does_not_relaunch() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 400.0, 300.0);
    let slot = spawn_projectile_slot(&mut world);
    world.add_observer(launch_observer);
    world.flush();

    world.get_mut::<Actor>(player).unwrap().begin_push();
    advance_animation(&mut world, 70); // complete the first push

    // Move the player; the projectile is still in flight.
    world.get_mut::<MapPosition>(player).unwrap().pos.x = 100.0;
    world.get_mut::<Actor>(player).unwrap().begin_push();
    advance_animation(&mut world, 29);

    let pos = world.get::<MapPosition>(slot).unwrap();
    assert!(approx_eq(pos.pos.x, 450.0)); // unchanged from the first launch
}

#[test]
fn projectile_moves_speed_pixels_per_tick() {
    let mut world = make_world();
    let slot = spawn_projectile_slot(&mut world);
    {
        let mut projectile = world.get_mut::<Projectile>(slot).unwrap();
        projectile.active = true;
        projectile.direction = 1.0;
    }
    world.get_mut::<MapPosition>(slot).unwrap().pos = Vector2 { x: 100.0, y: 300.0 };

    tick_flight(&mut world);
    tick_flight(&mut world);

    let pos = world.get::<MapPosition>(slot).unwrap();
    assert!(approx_eq(pos.pos.x, 120.0));
    assert!(world.get::<Projectile>(slot).unwrap().active);
}

#[test]
fn projectile_deactivates_past_left_edge() {
    let mut world = make_world();
    let slot = spawn_projectile_slot(&mut world);
    {
        let mut projectile = world.get_mut::<Projectile>(slot).unwrap();
        projectile.active = true;
        projectile.direction = -1.0;
    }
    world.get_mut::<MapPosition>(slot).unwrap().pos = Vector2 { x: 5.0, y: 300.0 };

    tick_flight(&mut world);

    let pos = world.get::<MapPosition>(slot).unwrap();
    assert!(approx_eq(pos.pos.x, -5.0));
    assert!(!world.get::<Projectile>(slot).unwrap().active);
}

#[test]
fn projectile_at_exact_left_edge_stays_active() {
    let mut world = make_world();
    let slot = spawn_projectile_slot(&mut world);
    {
        let mut projectile = world.get_mut::<Projectile>(slot).unwrap();
        projectile.active = true;
        projectile.direction = -1.0;
    }
    world.get_mut::<MapPosition>(slot).unwrap().pos = Vector2 { x: 10.0, y: 300.0 };

    tick_flight(&mut world);

    let pos = world.get::<MapPosition>(slot).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
    assert!(world.get::<Projectile>(slot).unwrap().active);
}

#[test]
fn projectile_right_edge_is_exclusive_too() {
    let mut world = make_world();
    let slot = spawn_projectile_slot(&mut world);
    {
        let mut projectile = world.get_mut::<Projectile>(slot).unwrap();
        projectile.active = true;
        projectile.direction = 1.0;
    }
    world.get_mut::<MapPosition>(slot).unwrap().pos = Vector2 { x: 790.0, y: 300.0 };

    tick_flight(&mut world); // lands exactly on the edge (x == 800)
    assert!(world.get::<Projectile>(slot).unwrap().active);

    tick_flight(&mut world); // x == 810, past the edge
    assert!(!world.get::<Projectile>(slot).unwrap().active);
}
