//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. It also
//! emits a [`ClickEvent`] on left mouse press, toggles debug mode on F11,
//! and feeds typed characters into the answer box while it is focused.
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton, RaylibHandle};

use crate::events::input::ClickEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;
use crate::resources::quiz::AnswerBox;

/// Poll Raylib for keyboard/mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut answer_box: ResMut<AnswerBox>,
    mut rl: NonSendMut<RaylibHandle>,
    mut commands: Commands,
) {
    let key = input.walk_left.key_binding;
    input
        .walk_left
        .update(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));
    let key = input.walk_right.key_binding;
    input
        .walk_right
        .update(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));
    let key = input.jump.key_binding;
    input
        .jump
        .update(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));
    let key = input.attack.key_binding;
    input
        .attack
        .update(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));
    let key = input.submit.key_binding;
    input
        .submit
        .update(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));
    let key = input.mode_debug.key_binding;
    input
        .mode_debug
        .update(rl.is_key_down(key), rl.is_key_pressed(key), rl.is_key_released(key));

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.trigger(ClickEvent {
            pos: rl.get_mouse_position(),
        });
    }

    // Text entry for the answer box. Drain the char queue so nothing leaks
    // into the next frame.
    if answer_box.focused {
        while let Some(c) = rl.get_char_pressed() {
            if !c.is_control() {
                answer_box.value.push(c);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
            answer_box.value.pop();
        }
    }
}
