//! Marker components identifying scene roles.
//!
//! Queries filter on these to keep the player, quiz NPCs, the hint prompter
//! and the key item disjoint.

use bevy_ecs::prelude::Component;

/// The controllable player character.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// A quiz NPC hidden behind a gate.
#[derive(Component, Debug, Clone, Copy)]
pub struct Npc;

/// The hint prompter character.
#[derive(Component, Debug, Clone, Copy)]
pub struct Prompter;

/// The clickable key item that toggles the prompter.
#[derive(Component, Debug, Clone, Copy)]
pub struct HintKey;
