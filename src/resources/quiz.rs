//! Quiz data and session state.
//!
//! - [`QuizTable`] is the question pool, loaded from a JSON file at startup.
//! - [`QuizSession`] is the state machine of the one-at-a-time quiz dialog.
//! - [`AnswerBox`] is the on-screen text field the player types into.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Off-screen parking spot for the answer box while no quiz is running.
const PARK_POS: Vector2 = Vector2 {
    x: -1000.0,
    y: -1000.0,
};

/// One row of the question table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answer: String,
    pub correct_feedback: String,
    pub wrong_feedback: String,
    pub hint: String,
}

/// The full question pool.
#[derive(Resource, Debug, Clone, Default)]
pub struct QuizTable {
    pub questions: Vec<QuizQuestion>,
}

impl QuizTable {
    /// Load the table from a JSON array of question rows.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read quiz file {}: {}", path.display(), e))?;
        let questions: Vec<QuizQuestion> = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse quiz file {}: {}", path.display(), e))?;
        Ok(QuizTable { questions })
    }
}

/// Phase of an active quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Question shown, waiting for an answer.
    #[default]
    Asking,
    /// Feedback shown, waiting for the dismiss timer.
    Feedback,
}

/// State of the one-at-a-time quiz dialog.
///
/// `generation` increments on every [`QuizSession::begin`]. Dismiss timers
/// record the generation they were armed with, so a timer from a session
/// that already ended cannot tear down a newer one.
#[derive(Resource, Debug, Clone, Default)]
pub struct QuizSession {
    pub active: bool,
    /// NPC the dialog is anchored to.
    pub npc: Option<Entity>,
    pub question: Option<QuizQuestion>,
    pub phase: QuizPhase,
    pub feedback: String,
    pub correct: bool,
    pub generation: u64,
}

impl QuizSession {
    /// Start a new session for `npc` with `question`.
    pub fn begin(&mut self, npc: Entity, question: QuizQuestion) {
        self.generation += 1;
        self.active = true;
        self.npc = Some(npc);
        self.question = Some(question);
        self.phase = QuizPhase::Asking;
        self.feedback.clear();
        self.correct = false;
    }

    /// Reset everything except the generation counter.
    pub fn end(&mut self) {
        self.active = false;
        self.npc = None;
        self.question = None;
        self.phase = QuizPhase::Asking;
        self.feedback.clear();
        self.correct = false;
    }
}

/// The on-screen text field the player answers in.
#[derive(Resource, Debug, Clone)]
pub struct AnswerBox {
    pub visible: bool,
    pub focused: bool,
    pub pos: Vector2,
    pub value: String,
}

impl Default for AnswerBox {
    fn default() -> Self {
        Self {
            visible: false,
            focused: false,
            pos: PARK_POS,
            value: String::new(),
        }
    }
}

impl AnswerBox {
    /// Clear, reposition, show and focus the box.
    pub fn open_at(&mut self, pos: Vector2) {
        self.value.clear();
        self.pos = pos;
        self.visible = true;
        self.focused = true;
    }

    /// Hide the box but keep its contents (feedback phase).
    pub fn hide(&mut self) {
        self.visible = false;
        self.focused = false;
    }

    /// Hide, clear and move the box back off-screen.
    pub fn park(&mut self) {
        self.hide();
        self.value.clear();
        self.pos = PARK_POS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> QuizQuestion {
        QuizQuestion {
            question: "2 + 2?".to_string(),
            answer: "4".to_string(),
            correct_feedback: "Right!".to_string(),
            wrong_feedback: "Nope".to_string(),
            hint: "Count on your fingers".to_string(),
        }
    }

    #[test]
    fn test_begin_bumps_generation_and_resets_phase() {
        let mut session = QuizSession::default();
        let npc = Entity::from_bits(7);
        session.begin(npc, question());
        assert!(session.active);
        assert_eq!(session.generation, 1);
        assert_eq!(session.phase, QuizPhase::Asking);
        assert_eq!(session.npc, Some(npc));

        session.end();
        session.begin(npc, question());
        assert_eq!(session.generation, 2);
    }

    #[test]
    fn test_end_keeps_generation() {
        let mut session = QuizSession::default();
        session.begin(Entity::from_bits(7), question());
        let generation = session.generation;
        session.end();
        assert!(!session.active);
        assert!(session.question.is_none());
        assert_eq!(session.generation, generation);
    }

    #[test]
    fn test_answer_box_open_and_park() {
        let mut answer_box = AnswerBox::default();
        assert!(!answer_box.visible);

        answer_box.value.push_str("stale");
        answer_box.open_at(Vector2 { x: 10.0, y: 20.0 });
        assert!(answer_box.visible);
        assert!(answer_box.focused);
        assert!(answer_box.value.is_empty());
        assert_eq!(answer_box.pos.x, 10.0);

        answer_box.value.push_str("typed");
        answer_box.hide();
        assert!(!answer_box.visible);
        assert_eq!(answer_box.value, "typed"); // kept through feedback

        answer_box.park();
        assert!(answer_box.value.is_empty());
        assert_eq!(answer_box.pos.x, -1000.0);
    }

    #[test]
    fn test_quiz_table_parses_json() {
        let raw = r#"[
            {
                "question": "2 + 2?",
                "answer": "4",
                "correct_feedback": "Right!",
                "wrong_feedback": "Nope",
                "hint": "Count on your fingers"
            }
        ]"#;
        let questions: Vec<QuizQuestion> = serde_json::from_str(raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0], question());
    }
}
