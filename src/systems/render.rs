//! Rendering.
//!
//! [`render_system`] is exclusive: it takes the raylib handle and thread out
//! of the world for the duration of the frame, draws the sprite pass, the
//! quiz/hint/answer-box panels and the debug overlay, then puts them back.
//! The simulation systems never touch raylib, so everything else runs
//! headless in tests.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::gate::Gate;
use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::components::sprite::Sprite;
use crate::components::tags::Prompter;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::quiz::{AnswerBox, QuizPhase, QuizSession};
use crate::resources::texturestore::TextureStore;

/// Scene backdrop, a pale sky blue.
const BACKDROP: Color = Color {
    r: 202,
    g: 240,
    b: 248,
    a: 255,
};

const UI_FONT_SIZE: i32 = 14;
const LINE_HEIGHT: i32 = UI_FONT_SIZE + 4;

/// Column budgets for the fixed-size panels: panel width minus padding over
/// an average glyph width of the default font at [`UI_FONT_SIZE`].
const QUIZ_WRAP_CHARS: usize = 34;
const HINT_WRAP_CHARS: usize = 22;

/// Text shown on the hint panel when no quiz is running.
const NO_QUESTION_HINT: &str = "No question right now";

/// Greedy word wrap at a column budget so panel text stays inside its box.
/// A single word longer than the budget gets a line of its own.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

struct DrawItem {
    sprite: Sprite,
    pos: Vector2,
    z: ZIndex,
    scale: f32,
    lift: f32,
}

pub fn render_system(world: &mut World) {
    // Raylib handle/thread leave the world while we hold the draw handle.
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKDROP);
        render_pass(world, &mut d);
        render_ui(world, &mut d);
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Painter's-algorithm sprite pass: collect visible sprites, sort by
/// `ZIndex`, draw centered on the entity position. Horizontal flipping uses
/// a negative source width; the jump lift raises the destination rect.
fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut to_draw: Vec<DrawItem> = {
        let mut q = world.query::<(
            &Sprite,
            &MapPosition,
            &ZIndex,
            Option<&Actor>,
            Option<&Gate>,
            Option<&Projectile>,
        )>();
        q.iter(world)
            .filter_map(|(sprite, position, z, actor, gate, projectile)| {
                let (visible, scale, lift) = if let Some(actor) = actor {
                    (actor.visible, actor.scale, actor.jump_lift)
                } else if let Some(gate) = gate {
                    (gate.visible, gate.scale, 0.0)
                } else if let Some(projectile) = projectile {
                    (projectile.active, projectile.scale, 0.0)
                } else {
                    (true, 1.0, 0.0)
                };
                if visible {
                    Some(DrawItem {
                        sprite: sprite.clone(),
                        pos: position.pos,
                        z: *z,
                        scale,
                        lift,
                    })
                } else {
                    None
                }
            })
            .collect()
    };

    to_draw.sort_by_key(|item| item.z);

    let textures = world.non_send_resource::<TextureStore>();

    for item in to_draw.iter() {
        let Some(tex) = textures.get(&item.sprite.tex_key) else {
            continue;
        };

        // Source rect selects a frame from the spritesheet.
        let mut src = Rectangle {
            x: item.sprite.offset.x,
            y: item.sprite.offset.y,
            width: item.sprite.width,
            height: item.sprite.height,
        };
        if item.sprite.flip_h {
            src.width = -src.width;
        }

        let dest = Rectangle {
            x: item.pos.x,
            y: item.pos.y - item.lift,
            width: item.sprite.width * item.scale,
            height: item.sprite.height * item.scale,
        };
        // Pivot at the sprite center.
        let origin = Vector2 {
            x: dest.width / 2.0,
            y: dest.height / 2.0,
        };
        d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
    }
}

/// Quiz panel, hint panel and answer box.
fn render_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    let session = world.resource::<QuizSession>().clone();
    let answer_box = world.resource::<AnswerBox>().clone();

    // Hint panel above the prompter while it is visible.
    let prompter = {
        let mut q = world.query_filtered::<(&Actor, &MapPosition), With<Prompter>>();
        q.iter(world)
            .find(|(actor, _)| actor.visible)
            .map(|(_, position)| position.pos)
    };
    if let Some(pos) = prompter {
        let x = pos.x as i32 - 100;
        let y = pos.y as i32 - 140;
        d.draw_rectangle(x, y, 200, 80, Color::RAYWHITE);
        d.draw_rectangle_lines(x, y, 200, 80, Color::BLACK);
        let hint = session
            .question
            .as_ref()
            .map(|q| q.hint.as_str())
            .unwrap_or(NO_QUESTION_HINT);
        for (i, line) in wrap_text(hint, HINT_WRAP_CHARS).iter().enumerate() {
            d.draw_text(
                line,
                x + 10,
                y + 10 + i as i32 * LINE_HEIGHT,
                UI_FONT_SIZE,
                Color::BLACK,
            );
        }
    }

    // Quiz panel under the NPC that owns the session.
    if session.active {
        if let Some(pos) = session.npc.and_then(|npc| {
            world
                .get::<MapPosition>(npc)
                .map(|position| position.pos)
        }) {
            let x = pos.x as i32 - 150;
            let y = pos.y as i32 + 30;
            d.draw_rectangle(x, y, 300, 100, Color::RAYWHITE);
            d.draw_rectangle_lines(x, y, 300, 100, Color::BLACK);
            let text = match session.phase {
                QuizPhase::Asking => session
                    .question
                    .as_ref()
                    .map(|q| q.question.as_str())
                    .unwrap_or(""),
                QuizPhase::Feedback => session.feedback.as_str(),
            };
            let color = match session.phase {
                QuizPhase::Feedback if session.correct => Color::DARKGREEN,
                QuizPhase::Feedback => Color::MAROON,
                QuizPhase::Asking => Color::BLACK,
            };
            for (i, line) in wrap_text(text, QUIZ_WRAP_CHARS).iter().enumerate() {
                d.draw_text(
                    line,
                    x + 10,
                    y + 10 + i as i32 * LINE_HEIGHT,
                    UI_FONT_SIZE,
                    color,
                );
            }
        }
    }

    if answer_box.visible {
        let x = answer_box.pos.x as i32;
        let y = answer_box.pos.y as i32;
        d.draw_rectangle(x, y, 110, 24, Color::WHITE);
        d.draw_rectangle_lines(x, y, 110, 24, Color::DARKGRAY);
        let text = if answer_box.focused {
            format!("{}_", answer_box.value)
        } else {
            answer_box.value.clone()
        };
        d.draw_text(&text, x + 4, y + 5, UI_FONT_SIZE, Color::BLACK);
    }
}

fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if world.contains_resource::<DebugMode>() {
        let debug_text = "DEBUG MODE (press F11 to toggle)";

        let fps = d.get_fps();
        let text = format!("{} | FPS: {}", debug_text, fps);
        d.draw_text(&text, 10, 10, 10, Color::BLACK);

        let entity_count = world.query::<()>().iter(world).count();
        let text = format!("Entities: {}", entity_count);
        d.draw_text(&text, 10, 30, 10, Color::BLACK);

        // Collider AABBs
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }

        // Position crosses
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            d.draw_line(
                position.pos.x as i32 - 5,
                position.pos.y as i32,
                position.pos.x as i32 + 5,
                position.pos.y as i32,
                Color::GREEN,
            );
            d.draw_line(
                position.pos.x as i32,
                position.pos.y as i32 - 5,
                position.pos.x as i32,
                position.pos.y as i32 + 5,
                Color::GREEN,
            );
        }
    }
}
