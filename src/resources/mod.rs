//! ECS resources: world-global state shared by systems.
//!
//! Submodules overview:
//! - [`debugmode`] – presence-based debug overlay toggle
//! - [`framesetstore`] – spritesheet frame strip definitions
//! - [`gameconfig`] – INI-backed window and data-path configuration
//! - [`gamestate`] – current and pending high-level game state
//! - [`input`] – per-frame keyboard input snapshot
//! - [`quiz`] – question table, quiz session and answer box
//! - [`screensize`] – framebuffer dimensions
//! - [`systemsstore`] – registry of named one-shot systems
//! - [`texturestore`] – loaded textures by key (non-send)
//! - [`worldtime`] – elapsed/delta time and the global frame counter

pub mod debugmode;
pub mod framesetstore;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod quiz;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
