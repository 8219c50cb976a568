//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the scene cares about and exposes it
//! to systems via the [`InputState`] resource. Arrow keys walk and jump,
//! space pushes, enter submits a quiz answer and F11 toggles the debug
//! overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Overwrite the per-frame state from a fresh hardware poll.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub walk_left: BoolState,
    pub walk_right: BoolState,
    pub jump: BoolState,
    // Action keys
    pub attack: BoolState,
    pub submit: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            walk_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            walk_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound_to(KeyboardKey::KEY_UP),
            attack: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            submit: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_boolstate_update() {
        let mut bs = BoolState::default();
        bs.update(true, true, false);
        assert!(bs.active);
        assert!(bs.just_pressed);
        assert!(!bs.just_released);
        bs.update(false, false, true);
        assert!(!bs.active);
        assert!(bs.just_released);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.walk_left.active);
        assert!(!input.walk_right.active);
        assert!(!input.jump.active);
        assert!(!input.attack.active);
        assert!(!input.submit.active);
        assert!(!input.mode_debug.active);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.walk_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.walk_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.attack.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.submit.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }
}
