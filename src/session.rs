use crate::config::MAX_DIGITS_LIMIT;
use crate::keypad::{KeypadCursor, KeypadKey};
use crate::logger;
use crate::models::{AppState, ProblemSet, Question, SessionStatus, SubmitOutcome};
use crate::shuffle::shuffled;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// One attempt at a problem set.
///
/// `current_index` only moves forward, one step per correct submission, and
/// reaches `questions.len()` exactly when the session is complete.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub title: String,
    questions: Vec<Question>,
    current_index: usize,
    pending_input: String,
    max_digits: usize,
    last_submit_was_correct: Option<bool>,
    pub keypad: KeypadCursor,
}

impl QuizSession {
    /// Draws `min(count, questions)` questions without replacement, in random order.
    /// `max_digits` is clamped to `1..=MAX_DIGITS_LIMIT`.
    pub fn start<R: Rng + ?Sized>(set: &ProblemSet, max_digits: usize, rng: &mut R) -> Self {
        let mut questions = shuffled(&set.questions, rng);
        questions.truncate(set.session_len());

        logger::log(&format!(
            "Starting \"{}\" with {} of {} questions",
            set.title,
            questions.len(),
            set.questions.len()
        ));

        Self {
            title: set.title.clone(),
            questions,
            current_index: 0,
            pending_input: String::new(),
            max_digits: max_digits.clamp(1, MAX_DIGITS_LIMIT),
            last_submit_was_correct: None,
            keypad: KeypadCursor::default(),
        }
    }

    /// Ignored once the input holds `max_digits` characters, or for non-digits.
    pub fn append_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.pending_input.len() < self.max_digits {
            self.pending_input.push(digit);
        }
    }

    pub fn clear_input(&mut self) {
        self.pending_input.clear();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.pending_input.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return SubmitOutcome::Ignored;
        };

        let correct = self
            .pending_input
            .parse::<u32>()
            .is_ok_and(|answer| answer == question.expected_answer);

        if !correct {
            logger::log(&format!(
                "Incorrect answer {} for \"{}\"",
                self.pending_input, question.prompt
            ));
            self.last_submit_was_correct = Some(false);
            return SubmitOutcome::Incorrect;
        }

        self.last_submit_was_correct = Some(true);
        self.pending_input.clear();
        self.current_index += 1;

        if self.is_complete() {
            logger::log(&format!("Completed \"{}\"", self.title));
            SubmitOutcome::Completed
        } else {
            SubmitOutcome::Correct
        }
    }

    pub fn press(&mut self, key: KeypadKey) -> SubmitOutcome {
        match key {
            KeypadKey::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.append_digit(c);
                }
                SubmitOutcome::Ignored
            }
            KeypadKey::Clear => {
                self.clear_input();
                SubmitOutcome::Ignored
            }
            KeypadKey::Submit => self.submit(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based position of the current question, capped at `total`.
    pub fn position(&self) -> usize {
        (self.current_index + 1).min(self.total())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// `Some(false)` after a wrong answer; `Some(true)` after a right one.
    pub fn last_submit_was_correct(&self) -> Option<bool> {
        self.last_submit_was_correct
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_complete() {
            SessionStatus::Complete
        } else {
            SessionStatus::InProgress
        }
    }
}

/// Maps a key press on the quiz screen to session operations.
pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> SubmitOutcome {
    let outcome = match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
            SubmitOutcome::Ignored
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            session.append_digit(c);
            SubmitOutcome::Ignored
        }
        KeyCode::Char('c') | KeyCode::Backspace | KeyCode::Delete => {
            session.clear_input();
            SubmitOutcome::Ignored
        }
        KeyCode::Enter => session.submit(),
        KeyCode::Char(' ') => session.press(session.keypad.selected()),
        KeyCode::Up => {
            session.keypad.up();
            SubmitOutcome::Ignored
        }
        KeyCode::Down => {
            session.keypad.down();
            SubmitOutcome::Ignored
        }
        KeyCode::Left => {
            session.keypad.left();
            SubmitOutcome::Ignored
        }
        KeyCode::Right => {
            session.keypad.right();
            SubmitOutcome::Ignored
        }
        _ => SubmitOutcome::Ignored,
    };

    if outcome == SubmitOutcome::Completed {
        *app_state = AppState::Completed;
    }

    outcome
}
