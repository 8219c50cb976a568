//! ECS systems: per-frame logic and event observers.
//!
//! Submodules overview:
//! - [`actor`] – animation advance, jump arc, apex gate checks, push launches
//! - [`gamestate`] – pending state transition check and run conditions
//! - [`gate`] – gate collection observer (single-visible-NPC transaction)
//! - [`input`] – raylib polling into `InputState`, clicks and text capture
//! - [`player`] – input-driven player state transitions and walking
//! - [`projectile`] – launch observer and per-tick flight
//! - [`quiz`] – click routing, answer submission, feedback dismiss timers
//! - [`render`] – painter's-algorithm sprite pass, UI panels, debug overlay
//! - [`time`] – world clock update

pub mod actor;
pub mod gamestate;
pub mod gate;
pub mod input;
pub mod player;
pub mod projectile;
pub mod quiz;
pub mod render;
pub mod time;
