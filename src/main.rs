//! Quiz Stage main entry point.
//!
//! A single-screen 2D quiz scene using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, the ECS world and resources
//! 2. Register observers and the state enter hooks, then enter Setup
//! 3. Run the main loop: input, state checks, player controller, animation,
//!    projectile flight, quiz submit/timers, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use quizstage::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use quizstage::events::switchdebug::switch_debug_observer;
use quizstage::game;
use quizstage::resources::debugmode::DebugMode;
use quizstage::resources::gameconfig::GameConfig;
use quizstage::resources::gamestate::{GameState, GameStates, NextGameState};
use quizstage::resources::input::InputState;
use quizstage::resources::quiz::{AnswerBox, QuizSession, QuizTable};
use quizstage::resources::screensize::ScreenSize;
use quizstage::resources::systemsstore::SystemsStore;
use quizstage::resources::worldtime::WorldTime;
use quizstage::systems::actor::actor_animation;
use quizstage::systems::gamestate::{check_pending_state, state_is_playing};
use quizstage::systems::gate::collect_observer;
use quizstage::systems::input::update_input_state;
use quizstage::systems::player::player_controller;
use quizstage::systems::projectile::{launch_observer, projectile_flight};
use quizstage::systems::quiz::{
    click_observer, quiz_dismiss_observer, quiz_submit, update_dismiss_timers,
};
use quizstage::systems::render::render_system;
use quizstage::systems::time::update_world_time;

/// Quiz Stage
#[derive(Parser)]
#[command(version, about = "A single-screen quiz scene built on raylib and bevy_ecs")]
struct Cli {
    /// Path to the quiz question table (JSON). Overrides the config file.
    #[arg(long, value_name = "PATH")]
    questions: Option<PathBuf>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Config & raylib window ---------------
    let mut config = GameConfig::new();
    config.load_from_file().ok(); // ignore errors, use defaults

    let (window_width, window_height) = config.window_size();

    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Quiz Stage");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let questions_path = cli
        .questions
        .clone()
        .unwrap_or_else(|| config.questions_path.clone());
    let quiz_table = QuizTable::load_from_file(&questions_path)
        .unwrap_or_else(|e| panic!("Failed to load quiz table: {e}"));
    log::info!(
        "Loaded {} questions from {:?}",
        quiz_table.questions.len(),
        questions_path
    );

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(QuizSession::default());
    world.insert_resource(AnswerBox::default());
    world.insert_resource(quiz_table);
    world.insert_resource(config);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Game state systems store
    let mut systems_store = SystemsStore::new();
    let setup_system_id = world.register_system(game::setup);
    systems_store.insert("setup", setup_system_id);
    let enter_play_system_id = world.register_system(game::enter_play);
    systems_store.insert("enter_play", enter_play_system_id);
    world.insert_resource(systems_store);

    // Observers must be registered before any system can trigger events.
    world.add_observer(observe_gamestate_change_event);
    world.add_observer(switch_debug_observer);
    world.add_observer(collect_observer);
    world.add_observer(launch_observer);
    world.add_observer(click_observer);
    world.add_observer(quiz_dismiss_observer);
    world.flush();

    // Enter the Setup state immediately.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        player_controller
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update.add_systems(actor_animation.after(player_controller));
    update.add_systems(projectile_flight.after(actor_animation));
    update.add_systems(quiz_submit.after(update_input_state));
    update.add_systems(update_dismiss_timers.after(quiz_submit));
    update.add_systems(
        render_system
            .after(projectile_flight)
            .after(update_dismiss_timers),
    );

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
