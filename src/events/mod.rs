//! Event types triggered via `Commands` and consumed by observers.
//!
//! Submodules overview:
//! - [`gamestate`] – pending state transition application
//! - [`gate`] – gate collection request
//! - [`input`] – mouse click in screen space
//! - [`projectile`] – projectile launch request
//! - [`quiz`] – quiz feedback dismissal
//! - [`switchdebug`] – debug overlay toggle

pub mod gamestate;
pub mod gate;
pub mod input;
pub mod projectile;
pub mod quiz;
pub mod switchdebug;
