use crate::keypad::{KEYPAD_LAYOUT, KeypadKey};
use crate::session::QuizSession;
use crate::ui::layout::{calculate_keypad_cells, calculate_quiz_chunks};
use crate::utils::help_line;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

pub const INCORRECT_MESSAGE: &str = "Not quite! Have another think.";

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let Some(question) = session.current_question() else {
        return;
    };

    let progress = format!(
        "Question {} / {} - {}",
        session.position(),
        session.total(),
        session.title
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(format!("{} =", question.prompt))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    let answer_title = format!("Your Answer (up to {} digits)", session.max_digits());
    let answer = Paragraph::new(session.pending_input().to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(answer_title));
    f.render_widget(answer, layout.answer_area);

    if session.last_submit_was_correct() == Some(false) {
        let message = Paragraph::new(Span::styled(
            INCORRECT_MESSAGE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(message, layout.message_area);
    }

    draw_keypad(f, session, layout.keypad_area);

    let help = Paragraph::new(help_line(&[
        ("0-9", "Type"),
        ("Enter", "Answer"),
        ("Bksp/c", "Clear"),
        ("Arrows+Space", "Keypad"),
        ("Esc", "Menu"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_keypad(f: &mut Frame, session: &QuizSession, area: ratatui::layout::Rect) {
    let cells = calculate_keypad_cells(area, KEYPAD_LAYOUT.len(), KEYPAD_LAYOUT[0].len());
    let selected = session.keypad;

    for (row, keys) in KEYPAD_LAYOUT.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            let base = match key {
                KeypadKey::Digit(_) => Style::default(),
                KeypadKey::Clear => Style::default().fg(Color::Red),
                KeypadKey::Submit => Style::default().fg(Color::Green),
            };
            let style = if selected.row == row && selected.col == col {
                base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                base
            };

            let button = Paragraph::new(key.label())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(button, cells[row][col]);
        }
    }
}
