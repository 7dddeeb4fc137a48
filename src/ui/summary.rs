use crate::session::QuizSession;
use crate::ui::layout::centered_rect;
use crate::utils::help_line;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub const COMPLETION_MESSAGE: &str = "You did them all! Amazing!";

/// Shown once every question in the session has been answered.
pub fn draw_completion(f: &mut Frame, session: &QuizSession) {
    let area = centered_rect(50, 9, f.area());

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        COMPLETION_MESSAGE,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("Finished \"{}\"", session.title)));
    text.push_line(Line::from(format!("Questions answered: {}", session.total())));
    text.push_line(Line::from(""));
    text.push_line(help_line(&[("Any key", "Back to the sets")]));

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title("All done"),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Fatal screen for a problems file that could not be loaded.
pub fn draw_load_error(f: &mut Frame, error: &str) {
    let area = centered_rect(70, 10, f.area());

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "Error: could not load the problems.",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(error.to_string()));
    text.push_line(Line::from(""));
    text.push_line(help_line(&[("Any key", "Quit")]));

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(popup, area);
}
