use crate::models::ProblemSet;
use crate::ui::layout::calculate_menu_chunks;
use crate::utils::{help_line, truncate_string};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const MAX_TITLE_WIDTH: usize = 60;

fn format_set_item(set: &ProblemSet) -> String {
    let count = set.session_len();
    let noun = if count == 1 { "question" } else { "questions" };
    format!(
        "{} ({} {})",
        truncate_string(&set.title, MAX_TITLE_WIDTH),
        count,
        noun
    )
}

pub fn draw_menu(f: &mut Frame, sets: &[ProblemSet], selected_index: usize) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Arithmetic Flashcards")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let items: Vec<ListItem> = if sets.is_empty() {
        vec![ListItem::new("No problem sets found").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        sets.iter()
            .enumerate()
            .map(|(i, set)| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format_set_item(set)).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Pick a problem set"),
    );
    f.render_widget(list, layout.list_area);

    let help = Paragraph::new(help_line(&[
        ("↑/↓", "Navigate"),
        ("Enter", "Start"),
        ("q/Esc", "Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
