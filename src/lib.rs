//! Quiz Stage: a single-screen 2D quiz scene.
//!
//! A player character walks, jumps and pushes across a static scene. Jumping
//! into a gift gate reveals the quiz NPC hidden behind it (one NPC at a
//! time); clicking a visible NPC opens a question with a typed answer box,
//! and a key item in the corner toggles a hint prompter.
//!
//! Built on **bevy_ecs** for the entity-component-system core and **raylib**
//! for windowing, textures, input and drawing. The simulation systems never
//! touch raylib handles, so the whole scene logic runs headless in the
//! integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
