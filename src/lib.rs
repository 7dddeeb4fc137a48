pub mod app;
pub mod config;
pub mod error;
pub mod keypad;
pub mod logger;
pub mod models;
pub mod problems;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use error::DataLoadError;
pub use keypad::{KeypadCursor, KeypadKey};
pub use models::{AppState, ProblemSet, Question, SessionStatus, SetConfig, SubmitOutcome};
pub use problems::{load_problem_sets, parse_problem_sets};
pub use session::{QuizSession, handle_quiz_input};
pub use shuffle::{shuffle, shuffled};
