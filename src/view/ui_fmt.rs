use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::viewmodel::Status;

/// Truncate to `width` characters, marking the cut with `…`
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Revision column style: lines changed at the viewed revision stand out in red
pub fn revision_style(is_current: bool) -> Style {
    if is_current {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

/// Footer key hint, e.g. `n` in yellow followed by its label
pub fn hint<'a>(key: &'a str, label: String) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}  ", label)),
    ]
}

pub fn status_span(status: Option<&Status>) -> Span<'_> {
    match status {
        Some(Status::Error(message)) => Span::styled(message.as_str(), Style::default().fg(Color::Red)),
        Some(Status::Info(message)) => Span::styled(message.as_str(), Style::default().fg(Color::Green)),
        None => Span::raw(""),
    }
}
