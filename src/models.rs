use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "q")]
    pub prompt: String,
    #[serde(rename = "a")]
    pub expected_answer: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SetConfig {
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProblemSet {
    pub title: String,
    pub questions: Vec<Question>,
    pub config: SetConfig,
}

impl ProblemSet {
    /// Number of questions a session drawn from this set will contain.
    pub fn session_len(&self) -> usize {
        self.config.count.min(self.questions.len())
    }
}

/// Top-level shape of the problems file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProblemFile {
    pub sets: Vec<ProblemSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing typed yet, or the session is already complete.
    Ignored,
    Correct,
    Incorrect,
    /// The last question was answered correctly.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Quiz,
    Completed,
    LoadError,
}
