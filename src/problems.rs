use crate::error::DataLoadError;
use crate::logger;
use crate::models::{ProblemFile, ProblemSet};
use std::path::Path;

/// Reads and validates the problems file. Either every set loads or none do.
pub async fn load_problem_sets(path: &Path) -> Result<Vec<ProblemSet>, DataLoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_problem_sets(&content)
}

pub fn parse_problem_sets(content: &str) -> Result<Vec<ProblemSet>, DataLoadError> {
    let file: ProblemFile = serde_json::from_str(content)?;

    for set in &file.sets {
        if set.session_len() == 0 {
            return Err(DataLoadError::EmptySet {
                title: set.title.clone(),
            });
        }
    }

    Ok(file.sets)
}

/// Logs questions whose answer cannot be typed within `max_digits`.
pub fn warn_unreachable_answers(sets: &[ProblemSet], max_digits: usize) {
    for set in sets {
        for question in &set.questions {
            let digits = question.expected_answer.to_string().len();
            if digits > max_digits {
                logger::log(&format!(
                    "Set \"{}\": answer to \"{}\" needs {} digits, keypad allows {}",
                    set.title, question.prompt, digits, max_digits
                ));
            }
        }
    }
}
