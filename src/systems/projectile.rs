//! Projectile launch and flight.
//!
//! [`launch_observer`] claims the first free pool slot; while any slot is
//! active further launches are ignored. [`projectile_flight`] moves active
//! projectiles a fixed number of pixels per tick and deactivates them once
//! strictly outside the screen on either side.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::components::sprite::Sprite;
use crate::events::projectile::LaunchEvent;
use crate::resources::framesetstore::FrameSetStore;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

pub fn launch_observer(
    trigger: On<LaunchEvent>,
    mut slots: Query<(&mut Projectile, &mut MapPosition)>,
) {
    // At most one projectile in flight.
    if slots.iter().any(|(projectile, _)| projectile.active) {
        return;
    }
    let event = trigger.event();
    if let Some((mut projectile, mut position)) = slots.iter_mut().next() {
        projectile.active = true;
        projectile.direction = event.direction;
        position.pos.x = event.x;
        position.pos.y = event.y;
    }
}

pub fn projectile_flight(
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    frame_sets: Res<FrameSetStore>,
    mut projectiles: Query<(&mut Projectile, &mut MapPosition, &mut Sprite)>,
) {
    for (mut projectile, mut position, mut sprite) in projectiles.iter_mut() {
        if !projectile.active {
            continue;
        }

        position.pos.x += projectile.speed * projectile.direction;

        if let Some(set) = frame_sets.get(&projectile.frame_set) {
            let frame = Actor::looping_frame(time.frame_count, projectile.divisor, set.frame_count);
            sprite.offset = set.frame_offset(frame);
            sprite.width = set.frame_width;
            sprite.height = set.frame_height;
        }
        sprite.flip_h = projectile.direction < 0.0;

        // Exclusive bounds on both sides: x == 0 and x == width stay alive.
        if position.pos.x < 0.0 || position.pos.x > screen.w as f32 {
            projectile.active = false;
        }
    }
}
