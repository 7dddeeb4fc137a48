use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub const KEYPAD_KEY_WIDTH: u16 = 9;
pub const KEYPAD_KEY_HEIGHT: u16 = 3;

pub struct MenuLayout {
    pub title_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub message_area: Rect,
    pub keypad_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        title_area: chunks[0],
        list_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(KEYPAD_KEY_HEIGHT * 4),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        message_area: chunks[3],
        keypad_area: chunks[4],
        help_area: chunks[5],
    }
}

/// Cell rectangles for a `rows` x `cols` keypad, centred in `area`.
pub fn calculate_keypad_cells(area: Rect, rows: usize, cols: usize) -> Vec<Vec<Rect>> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints(vec![Constraint::Length(KEYPAD_KEY_HEIGHT); rows])
        .split(area);

    row_areas
        .iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .flex(Flex::Center)
                .constraints(vec![Constraint::Length(KEYPAD_KEY_WIDTH); cols])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Rectangle of `width` x `height` centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
