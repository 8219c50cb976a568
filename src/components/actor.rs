//! Animated character state machine.
//!
//! An [`Actor`] is any animated character in the scene: the player, the
//! hidden NPCs, the prompter and the key item. It tracks which of the four
//! animation states is active, the facing direction, and the animation
//! cursors.
//!
//! Two cursor strategies coexist:
//! - Idle and Walking loop forever, so their frame is derived from the
//!   global frame counter ([`Actor::looping_frame`]) and nothing is stored.
//! - Jumping and Pushing play once, so each keeps its own stored cursor
//!   (`jump_cursor` / `push_cursor`) that advances every `divisor` ticks and
//!   returns the actor to Idle on completion.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

/// Peak height of the jump arc in pixels.
pub const JUMP_HEIGHT: f32 = 200.0;
/// Push frame on which the projectile leaves the actor's hands.
pub const PUSH_LAUNCH_FRAME: usize = 7;
/// Horizontal distance from the actor to the projectile spawn point.
pub const LAUNCH_OFFSET: f32 = 50.0;
/// Default number of ticks per animation frame.
pub const DEFAULT_DIVISOR: u64 = 4;

/// Horizontal facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right.
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The four animation states an actor can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActorState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Pushing,
}

/// Animated character component.
#[derive(Component, Debug, Clone)]
pub struct Actor {
    pub state: ActorState,
    pub facing: Facing,
    pub scale: f32,
    pub visible: bool,
    /// Walk speed in pixels per tick.
    pub speed: f32,
    /// Ticks per animation frame.
    pub divisor: u64,
    pub jump_cursor: usize,
    pub push_cursor: usize,
    /// Vertical offset applied while jumping, written by the animation system.
    pub jump_lift: f32,
    /// Frame-set key per state. `Idle` is the fallback for missing states.
    pub frame_sets: FxHashMap<ActorState, String>,
}

impl Actor {
    pub fn new(scale: f32) -> Self {
        Self {
            state: ActorState::Idle,
            facing: Facing::Right,
            scale,
            visible: true,
            speed: 0.0,
            divisor: DEFAULT_DIVISOR,
            jump_cursor: 0,
            push_cursor: 0,
            jump_lift: 0.0,
            frame_sets: FxHashMap::default(),
        }
    }

    pub fn with_frame_set(mut self, state: ActorState, key: impl Into<String>) -> Self {
        self.frame_sets.insert(state, key.into());
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Frame-set key for the current state, falling back to the idle set.
    pub fn frame_set_key(&self) -> Option<&str> {
        self.frame_sets
            .get(&self.state)
            .or_else(|| self.frame_sets.get(&ActorState::Idle))
            .map(String::as_str)
    }

    /// Whether new actions (jump, push, collect, walk) are accepted.
    /// Input is ignored while an action animation is playing.
    pub fn can_act(&self) -> bool {
        matches!(self.state, ActorState::Idle | ActorState::Walking)
    }

    /// Start the jump animation from frame 0. No-op unless idle or walking.
    pub fn begin_jump(&mut self) {
        if self.can_act() {
            self.state = ActorState::Jumping;
            self.jump_cursor = 0;
        }
    }

    /// Start the push animation from frame 0. No-op unless idle or walking.
    pub fn begin_push(&mut self) {
        if self.can_act() {
            self.state = ActorState::Pushing;
            self.push_cursor = 0;
        }
    }

    /// Time-derived frame index for looping states.
    pub fn looping_frame(frame_count: u64, divisor: u64, len: usize) -> usize {
        ((frame_count / divisor.max(1)) as usize) % len.max(1)
    }

    /// Vertical lift at a given jump cursor: a half sine arc that starts and
    /// ends at zero and peaks at [`JUMP_HEIGHT`].
    pub fn jump_lift_at(cursor: usize, len: usize) -> f32 {
        if len < 2 {
            return 0.0;
        }
        let progress = cursor.min(len - 1) as f32 / (len - 1) as f32;
        (progress * std::f32::consts::PI).sin() * JUMP_HEIGHT
    }

    /// Cursor at which the jump arc is at its apex and gates are checked.
    pub fn apex_frame(len: usize) -> usize {
        len / 2
    }
}
