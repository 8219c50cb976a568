//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene world.
//!
//! Submodules overview:
//! - [`actor`] – animated character state machine (idle/walking/jumping/pushing)
//! - [`boxcollider`] – axis-aligned rectangular collider for click hit-testing
//! - [`gate`] – collectible gate hiding an NPC behind it
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`projectile`] – pooled projectile slot launched by the push animation
//! - [`sprite`] – 2D sprite rendering component
//! - [`tags`] – marker components identifying scene roles
//! - [`timer`] – countdown timer that dismisses quiz feedback
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod actor;
pub mod boxcollider;
pub mod gate;
pub mod mapposition;
pub mod projectile;
pub mod sprite;
pub mod tags;
pub mod timer;
pub mod zindex;
