use std::path::PathBuf;

pub const DEFAULT_PROBLEMS_PATH: &str = "problems.json";
pub const DEFAULT_LOG_PATH: &str = "flashcards_debug.log";
pub const DEFAULT_MAX_DIGITS: usize = 3;
/// Keeps any typed answer parseable as a `u32`.
pub const MAX_DIGITS_LIMIT: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub problems_path: PathBuf,
    pub max_digits: usize,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problems_path: PathBuf::from(DEFAULT_PROBLEMS_PATH),
            max_digits: DEFAULT_MAX_DIGITS,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl Config {
    /// Reads the process arguments and `FLASHCARDS_*` environment variables.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    /// A positional argument wins over `FLASHCARDS_PROBLEMS`.
    pub fn resolve(arg: Option<String>, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = arg.or_else(|| env("FLASHCARDS_PROBLEMS")) {
            config.problems_path = PathBuf::from(path);
        }

        let digits = env("FLASHCARDS_MAX_DIGITS").and_then(|v| v.trim().parse::<usize>().ok());
        if let Some(digits) = digits {
            config.max_digits = digits.clamp(1, MAX_DIGITS_LIMIT);
        }

        if let Some(path) = env("FLASHCARDS_LOG") {
            config.log_path = PathBuf::from(path);
        }

        config
    }
}
