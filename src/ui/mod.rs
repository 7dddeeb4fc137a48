pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use layout::{calculate_keypad_cells, calculate_menu_chunks, calculate_quiz_chunks};
pub use menu::draw_menu;
pub use quiz::{INCORRECT_MESSAGE, draw_quiz};
pub use summary::{COMPLETION_MESSAGE, draw_completion, draw_load_error};

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

/// Draws whichever screen matches the app state.
pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, app.problem_sets(), app.selected_set_index),
        AppState::Quiz => {
            if let Some(session) = app.session() {
                draw_quiz(f, session);
            }
        }
        AppState::Completed => {
            draw_menu(f, app.problem_sets(), app.selected_set_index);
            if let Some(session) = app.session() {
                draw_completion(f, session);
            }
        }
        AppState::LoadError => draw_load_error(f, app.load_error().unwrap_or("unknown error")),
    }
}
