use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to at most `max_width` display columns, ending in "..." when cut.
/// Set titles may be written in any script, so widths are measured per char.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Help bar line: highlighted key names followed by their descriptions.
pub fn help_line(entries: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, (key, label)) in entries.iter().enumerate() {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        let separator = if i + 1 < entries.len() { "  " } else { "" };
        spans.push(Span::from(format!(" {}{}", label, separator)));
    }
    Line::from(spans)
}
