use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::repository::CommandRunner;
use crate::viewmodel::AppViewModel;

use super::ui_fmt;

pub fn render<R: CommandRunner>(frame: &mut Frame, vm: &AppViewModel<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(0),     // List
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vm, chunks[0]);
    render_list(frame, vm, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_header<R: CommandRunner>(frame: &mut Frame, vm: &AppViewModel<R>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("RECENT REVISIONS", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::raw(vm.title()),
        Span::raw(" | "),
        ui_fmt::status_span(vm.status()),
    ]))
    .block(Block::default().borders(Borders::ALL).title("svn-timemachine"));
    frame.render_widget(header, area);
}

fn render_list<R: CommandRunner>(frame: &mut Frame, vm: &AppViewModel<R>, area: Rect) {
    let current = vm.navigator().current_revision();
    let recent = vm.recent_vm();

    let items: Vec<ListItem> = recent
        .revisions()
        .iter()
        .map(|revision| {
            let marker = if *revision == current { " (viewing)" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(format!("r{:<8}", revision), ui_fmt::revision_style(*revision == current)),
                Span::raw(marker),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(recent.selected_index()));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!("Last {} changes", recent.revisions().len())))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    spans.extend(ui_fmt::hint("↑/↓", "nav".to_string()));
    spans.extend(ui_fmt::hint("Enter", "go to".to_string()));
    spans.extend(ui_fmt::hint("R/Esc", "back".to_string()));
    spans.extend(ui_fmt::hint("q", "quit".to_string()));

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
