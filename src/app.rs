use crate::config::{Config, MAX_DIGITS_LIMIT};
use crate::logger;
use crate::models::{AppState, ProblemSet, SessionStatus};
use crate::problems::{load_problem_sets, warn_unreachable_answers};
use crate::session::{QuizSession, handle_quiz_input};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use std::path::Path;

/// Everything the screens need: loaded sets, menu selection and the active
/// session. There is at most one session at a time.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    problem_sets: Vec<ProblemSet>,
    pub selected_set_index: usize,
    session: Option<QuizSession>,
    load_error: Option<String>,
    max_digits: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_sets(Vec::new(), config.max_digits)
    }

    pub fn with_sets(problem_sets: Vec<ProblemSet>, max_digits: usize) -> Self {
        Self {
            state: AppState::Menu,
            problem_sets,
            selected_set_index: 0,
            session: None,
            load_error: None,
            max_digits: max_digits.clamp(1, MAX_DIGITS_LIMIT),
            should_quit: false,
        }
    }

    /// Loads the problems file. On failure the app stays on the error screen
    /// and keeps no sets.
    pub async fn load_problem_sets(&mut self, path: &Path) {
        match load_problem_sets(path).await {
            Ok(sets) => {
                logger::log(&format!(
                    "Loaded {} problem sets from {}",
                    sets.len(),
                    path.display()
                ));
                warn_unreachable_answers(&sets, self.max_digits);
                self.problem_sets = sets;
                self.load_error = None;
                self.state = AppState::Menu;
            }
            Err(e) => {
                logger::log(&format!("Failed to load problem sets: {}", e));
                self.problem_sets.clear();
                self.load_error = Some(e.to_string());
                self.state = AppState::LoadError;
            }
        }
    }

    pub fn list_sets(&self) -> Vec<&str> {
        self.problem_sets.iter().map(|s| s.title.as_str()).collect()
    }

    pub fn problem_sets(&self) -> &[ProblemSet] {
        &self.problem_sets
    }

    /// Replaces any running session with a fresh one for the set at `index`.
    /// Returns `false` for an unknown index or a set with nothing to ask.
    pub fn start<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> bool {
        let Some(set) = self.problem_sets.get(index) else {
            return false;
        };
        if set.session_len() == 0 {
            logger::log(&format!("Refusing to start empty set \"{}\"", set.title));
            return false;
        }
        self.session = Some(QuizSession::start(set, self.max_digits, rng));
        self.selected_set_index = index;
        self.state = AppState::Quiz;
        true
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn session_status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map_or(SessionStatus::NotStarted, QuizSession::status)
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Menu => self.handle_menu_input(key, rng),
            AppState::Quiz => {
                if let Some(session) = self.session.as_mut() {
                    handle_quiz_input(session, key, &mut self.state);
                }
                if self.state == AppState::Menu {
                    self.session = None;
                }
            }
            AppState::Completed => {
                self.session = None;
                self.state = AppState::Menu;
            }
            AppState::LoadError => self.should_quit = true,
        }
    }

    fn handle_menu_input<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R) {
        match key.code {
            KeyCode::Up => {
                self.selected_set_index = self.selected_set_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_set_index < self.problem_sets.len().saturating_sub(1) {
                    self.selected_set_index += 1;
                }
            }
            KeyCode::Enter => {
                self.start(self.selected_set_index, rng);
            }
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, SetConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn sample_sets() -> Vec<ProblemSet> {
        vec![
            ProblemSet {
                title: "One question".to_string(),
                questions: vec![Question {
                    prompt: "3 + 4".to_string(),
                    expected_answer: 7,
                }],
                config: SetConfig { count: 1 },
            },
            ProblemSet {
                title: "Doubles".to_string(),
                questions: (1..=5)
                    .map(|n| Question {
                        prompt: format!("{} + {}", n, n),
                        expected_answer: n * 2,
                    })
                    .collect(),
                config: SetConfig { count: 3 },
            },
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_list_sets_in_file_order() {
        let app = App::with_sets(sample_sets(), 3);
        assert_eq!(app.list_sets(), vec!["One question", "Doubles"]);
        assert_eq!(app.session_status(), SessionStatus::NotStarted);
    }

    #[test]
    fn test_menu_navigation_clamps() {
        let mut app = App::with_sets(sample_sets(), 3);
        let mut rng = StdRng::seed_from_u64(0);

        app.handle_key(key(KeyCode::Up), &mut rng);
        assert_eq!(app.selected_set_index, 0);

        app.handle_key(key(KeyCode::Down), &mut rng);
        app.handle_key(key(KeyCode::Down), &mut rng);
        assert_eq!(app.selected_set_index, 1);
    }

    #[test]
    fn test_enter_starts_selected_set() {
        let mut app = App::with_sets(sample_sets(), 3);
        let mut rng = StdRng::seed_from_u64(0);

        app.handle_key(key(KeyCode::Down), &mut rng);
        app.handle_key(key(KeyCode::Enter), &mut rng);

        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session_status(), SessionStatus::InProgress);
        let session = app.session().unwrap();
        assert_eq!(session.title, "Doubles");
        assert_eq!(session.total(), 3);
    }

    #[test]
    fn test_enter_with_no_sets_stays_on_menu() {
        let mut app = App::with_sets(Vec::new(), 3);
        let mut rng = StdRng::seed_from_u64(0);
        app.handle_key(key(KeyCode::Enter), &mut rng);
        assert_eq!(app.state, AppState::Menu);
        assert!(app.session().is_none());
    }

    #[test]
    fn test_completion_returns_to_menu() {
        let mut app = App::with_sets(sample_sets(), 3);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(app.start(0, &mut rng));
        app.handle_key(key(KeyCode::Char('7')), &mut rng);
        app.handle_key(key(KeyCode::Enter), &mut rng);
        assert_eq!(app.state, AppState::Completed);
        assert_eq!(app.session_status(), SessionStatus::Complete);

        app.handle_key(key(KeyCode::Char('x')), &mut rng);
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.session_status(), SessionStatus::NotStarted);
    }

    #[test]
    fn test_escape_discards_session() {
        let mut app = App::with_sets(sample_sets(), 3);
        let mut rng = StdRng::seed_from_u64(0);

        app.start(1, &mut rng);
        app.handle_key(key(KeyCode::Esc), &mut rng);
        assert_eq!(app.state, AppState::Menu);
        assert!(app.session().is_none());
    }

    #[test]
    fn test_restart_replaces_session() {
        let mut app = App::with_sets(sample_sets(), 3);
        let mut rng = StdRng::seed_from_u64(0);

        app.start(1, &mut rng);
        app.handle_key(key(KeyCode::Char('9')), &mut rng);
        app.start(0, &mut rng);

        let session = app.session().unwrap();
        assert_eq!(session.title, "One question");
        assert_eq!(session.pending_input(), "");
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_start_out_of_range() {
        let mut app = App::with_sets(sample_sets(), 3);
        assert!(!app.start(5, &mut StdRng::seed_from_u64(0)));
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_start_refuses_sets_without_questions() {
        let mut sets = sample_sets();
        sets.push(ProblemSet {
            title: "Nothing".to_string(),
            questions: Vec::new(),
            config: SetConfig { count: 3 },
        });
        sets.push(ProblemSet {
            title: "Zero".to_string(),
            questions: sets[0].questions.clone(),
            config: SetConfig { count: 0 },
        });
        let mut app = App::with_sets(sets, 3);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(!app.start(2, &mut rng));
        assert!(!app.start(3, &mut rng));
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.session_status(), SessionStatus::NotStarted);

        app.selected_set_index = 2;
        app.handle_key(key(KeyCode::Enter), &mut rng);
        assert_eq!(app.state, AppState::Menu);
        assert!(app.session().is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut rng = StdRng::seed_from_u64(0);

        let mut app = App::with_sets(sample_sets(), 3);
        app.handle_key(key(KeyCode::Char('q')), &mut rng);
        assert!(app.should_quit());

        let mut app = App::with_sets(sample_sets(), 3);
        app.start(0, &mut rng);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut rng,
        );
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_load_error_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let mut app = App::new(&Config::default());
        app.load_problem_sets(file.path()).await;

        assert_eq!(app.state, AppState::LoadError);
        assert!(app.load_error().is_some());
        assert!(app.list_sets().is_empty());

        let mut rng = StdRng::seed_from_u64(0);
        app.handle_key(key(KeyCode::Enter), &mut rng);
        assert!(app.should_quit());
        assert!(app.session().is_none());
    }

    #[tokio::test]
    async fn test_load_success_shows_menu() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{ "sets": [ { "title": "Tiny",
                "questions": [ { "q": "1 + 1", "a": 2 } ], "config": { "count": 1 } } ] }"#,
        )
        .unwrap();

        let mut app = App::new(&Config::default());
        app.load_problem_sets(file.path()).await;

        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.list_sets(), vec!["Tiny"]);
        assert!(app.load_error().is_none());
    }
}
