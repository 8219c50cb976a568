//! Quiz dismissal event.

use bevy_ecs::prelude::Event;

/// Fired when a feedback dismiss timer expires.
///
/// Carries the session generation the timer was armed with; the observer
/// ignores the event when the session has since moved on.
#[derive(Event, Debug, Clone, Copy)]
pub struct QuizDismissEvent {
    pub generation: u64,
}
