//! Scene setup and state hooks.
//!
//! [`setup`] runs on entering the Setup state: it loads every texture,
//! registers the frame-set definitions and requests the Playing state.
//! [`enter_play`] runs on entering Playing and spawns the scene: the player,
//! three NPCs each hidden behind a gate, the hint prompter, the key item and
//! the projectile pool.
//!
//! Missing assets are fatal configuration errors, so loading panics with the
//! offending path instead of limping along.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::actor::{Actor, ActorState, Facing};
use crate::components::boxcollider::BoxCollider;
use crate::components::gate::Gate;
use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::components::sprite::Sprite;
use crate::components::tags::{HintKey, Npc, Player, Prompter};
use crate::components::zindex::ZIndex;
use crate::resources::framesetstore::{FrameSet, FrameSetStore};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const PLAYER_SCALE: f32 = 2.25;
const PLAYER_SPEED: f32 = 5.0;
const PROJECTILE_SPEED: f32 = 10.0;
const GIFT_SCALE: f32 = 2.25;

/// Load textures and frame sets, then request the Playing state.
///
/// Exclusive: texture loading needs the raylib handle and thread, and the
/// texture store is non-send, so the world is threaded through directly.
pub fn setup(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing during setup");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing during setup");

    let mut textures = TextureStore::new();
    for (key, path) in [
        ("player_idle", "./assets/sprites/player_idle.png"),
        ("player_walk", "./assets/sprites/player_walk.png"),
        ("player_jump", "./assets/sprites/player_jump.png"),
        ("player_push", "./assets/sprites/player_push.png"),
        ("projectile", "./assets/sprites/tool.png"),
        ("npc_one", "./assets/sprites/npc_one.png"),
        ("npc_two", "./assets/sprites/npc_two.png"),
        ("npc_three", "./assets/sprites/npc_three.png"),
        ("prompter", "./assets/sprites/prompter.png"),
        ("key", "./assets/sprites/key.png"),
        ("gift", "./assets/sprites/gift.png"),
    ] {
        let texture = rl
            .load_texture(&thread, path)
            .unwrap_or_else(|e| panic!("Failed to load texture {path}: {e}"));
        textures.insert(key, texture);
    }

    // Every animation is a horizontal strip; frame widths are the strip
    // width divided by the frame count.
    let mut frame_sets = FrameSetStore::default();
    frame_sets.insert(
        "player_idle",
        FrameSet::new("player_idle", 24, 1363.0 / 24.0, 106.0),
    );
    frame_sets.insert(
        "player_walk",
        FrameSet::new("player_walk", 12, 775.0 / 12.0, 105.0),
    );
    frame_sets.insert(
        "player_jump",
        FrameSet::new("player_jump", 21, 2137.0 / 21.0, 97.0),
    );
    frame_sets.insert(
        "player_push",
        FrameSet::new("player_push", 17, 1729.0 / 17.0, 118.0),
    );
    frame_sets.insert(
        "projectile",
        FrameSet::new("projectile", 15, 2110.0 / 15.0, 102.0),
    );
    frame_sets.insert("npc_one", FrameSet::new("npc_one", 18, 1597.0 / 18.0, 191.0));
    frame_sets.insert("npc_two", FrameSet::new("npc_two", 8, 1107.0 / 8.0, 196.0));
    frame_sets.insert("npc_three", FrameSet::new("npc_three", 6, 355.0 / 6.0, 87.0));
    frame_sets.insert("prompter", FrameSet::new("prompter", 6, 343.0 / 6.0, 43.0));
    frame_sets.insert("key", FrameSet::new("key", 10, 475.0 / 10.0, 40.0));
    // The gift is a single still image; take its size from the texture.
    {
        let gift = textures.get("gift").expect("gift texture just loaded");
        frame_sets.insert(
            "gift",
            FrameSet::new("gift", 1, gift.width as f32, gift.height as f32),
        );
    }

    world.insert_non_send_resource(textures);
    world.insert_resource(frame_sets);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.resource_mut::<NextGameState>().set(GameStates::Playing);
}

/// Spawn the scene entities.
///
/// Draw order: NPCs (0), gates (1), key (2), prompter (3), projectile (4),
/// player (5); UI panels are drawn after the sprite pass.
pub fn enter_play(mut commands: Commands, frame_sets: Res<FrameSetStore>, screen: Res<ScreenSize>) {
    let w = screen.w as f32;
    let h = screen.h as f32;

    // Player
    commands.spawn((
        Player,
        Actor::new(PLAYER_SCALE)
            .with_speed(PLAYER_SPEED)
            .with_frame_set(ActorState::Idle, "player_idle")
            .with_frame_set(ActorState::Walking, "player_walk")
            .with_frame_set(ActorState::Jumping, "player_jump")
            .with_frame_set(ActorState::Pushing, "player_push"),
        MapPosition::new(w / 2.0, h / 2.0 + 0.2 * h),
        sprite_for(&frame_sets, "player_idle"),
        collider_for(&frame_sets, "player_idle", PLAYER_SCALE),
        ZIndex(5),
    ));

    // Projectile pool: one reusable slot, parked off-screen.
    commands.spawn((
        Projectile::new("projectile", PROJECTILE_SPEED, PLAYER_SCALE),
        MapPosition::new(-2000.0, -2000.0),
        sprite_for(&frame_sets, "projectile"),
        ZIndex(4),
    ));

    // NPCs and their gates.
    let npc_y = h / 3.0 - 0.05 * h;
    let npc_defs: [(&str, f32, f32, Facing); 3] = [
        ("npc_one", w / 3.0, 1.35, Facing::Right),
        ("npc_two", w / 2.0, 1.35, Facing::Right),
        ("npc_three", 2.0 * w / 3.0, 2.7, Facing::Left),
    ];
    let gift_width = frame_sets
        .get("gift")
        .expect("Frame set gift missing during scene spawn")
        .frame_width;
    for (key, x, scale, facing) in npc_defs {
        let npc = commands
            .spawn((
                Npc,
                Actor::new(scale)
                    .with_facing(facing)
                    .with_frame_set(ActorState::Idle, key)
                    .hidden(),
                MapPosition::new(x, npc_y),
                sprite_for(&frame_sets, key),
                collider_for(&frame_sets, key, scale),
                ZIndex(0),
            ))
            .id();
        commands.spawn((
            Gate::new(npc, gift_width * GIFT_SCALE).with_scale(GIFT_SCALE),
            MapPosition::new(x, npc_y),
            sprite_for(&frame_sets, "gift"),
            ZIndex(1),
        ));
    }

    // Hint prompter, hidden until the key is clicked.
    commands.spawn((
        Prompter,
        Actor::new(2.5)
            .with_frame_set(ActorState::Idle, "prompter")
            .hidden(),
        MapPosition::new(2.0 * w / 3.0, 2.0 * h / 3.0 + 0.15 * h),
        sprite_for(&frame_sets, "prompter"),
        collider_for(&frame_sets, "prompter", 2.5),
        ZIndex(3),
    ));

    // Key item in the lower-right corner.
    commands.spawn((
        HintKey,
        Actor::new(2.5).with_frame_set(ActorState::Idle, "key"),
        MapPosition::new(w - 150.0, h - 100.0),
        sprite_for(&frame_sets, "key"),
        collider_for(&frame_sets, "key", 2.5),
        ZIndex(2),
    ));
}

fn sprite_for(frame_sets: &FrameSetStore, key: &str) -> Sprite {
    let set = frame_sets
        .get(key)
        .unwrap_or_else(|| panic!("Frame set {key} missing during scene spawn"));
    Sprite::new(set.tex_key.clone(), set.frame_width, set.frame_height)
}

/// Click collider covering frame 0 at display scale, centered on the entity.
fn collider_for(frame_sets: &FrameSetStore, key: &str, scale: f32) -> BoxCollider {
    let set = frame_sets
        .get(key)
        .unwrap_or_else(|| panic!("Frame set {key} missing during scene spawn"));
    BoxCollider::centered(set.frame_width * scale, set.frame_height * scale)
}
