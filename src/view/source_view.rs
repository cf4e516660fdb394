use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::RevisionDetail;
use crate::repository::CommandRunner;
use crate::util::{expand_tabs, format_commit_date};
use crate::viewmodel::AppViewModel;

use super::ui_fmt;

/// Height of the revision detail pane, borders included
pub const DETAIL_PANE_ROWS: u16 = 12;

/// Rows taken by the detail pane, zero while it is closed
pub fn detail_pane_height(open: bool) -> u16 {
    if open { DETAIL_PANE_ROWS } else { 0 }
}

pub fn render<R: CommandRunner>(frame: &mut Frame, vm: &AppViewModel<R>, area: Rect) {
    let detail = vm.detail();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                        // Header
            Constraint::Min(5),                                           // Source
            Constraint::Length(detail_pane_height(detail.is_some())), // Revision details
            Constraint::Length(3),                                        // Footer
        ])
        .split(area);

    render_header(frame, vm, chunks[0]);
    render_source(frame, vm, chunks[1]);
    if let Some(detail) = detail {
        render_detail(frame, detail, chunks[2]);
    }
    render_footer(frame, vm, chunks[3]);
}

fn render_header<R: CommandRunner>(frame: &mut Frame, vm: &AppViewModel<R>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(vm.title(), Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        ui_fmt::status_span(vm.status()),
    ]))
    .block(Block::default().borders(Borders::ALL).title("svn-timemachine"));
    frame.render_widget(header, area);
}

fn render_source<R: CommandRunner>(frame: &mut Frame, vm: &AppViewModel<R>, area: Rect) {
    let snapshot = vm.snapshot();

    let items: Vec<ListItem> = snapshot
        .rows()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>5}", row.number), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(format!("{:>8}", row.blame.revision), ui_fmt::revision_style(row.is_current)),
                Span::raw(" "),
                Span::styled(
                    format!("{:>10}", ui_fmt::fit(&row.blame.author, 10)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(" "),
                Span::styled(format_commit_date(row.blame.date), Style::default().fg(Color::DarkGray)),
                Span::raw(" │ "),
                Span::raw(expand_tabs(row.code).into_owned()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(vm.selected_row()));
    }

    let title = format!("r{} ({} lines)", snapshot.revision, snapshot.row_count());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, detail: &RevisionDetail, area: Rect) {
    let text: Vec<Line> = detail.log.lines().map(Line::raw).collect();
    let panel = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Showing details for r{}", detail.revision)),
        );
    frame.render_widget(panel, area);
}

fn render_footer<R: CommandRunner>(frame: &mut Frame, vm: &AppViewModel<R>, area: Rect) {
    let current = vm.navigator().current_revision();

    let mut spans = Vec::new();
    spans.extend(ui_fmt::hint("↑/↓", "line".to_string()));
    spans.extend(ui_fmt::hint("p", match current.previous() {
        Some(prev) => format!("go to r{}", prev),
        None => "-".to_string(),
    }));
    spans.extend(ui_fmt::hint("c", format!("reload r{}", current)));
    spans.extend(ui_fmt::hint("n", format!("go to r{}", current.next())));
    spans.extend(ui_fmt::hint("Enter", "details".to_string()));
    if let Some(detail) = vm.detail() {
        if let Some(before) = detail.revision.previous() {
            spans.extend(ui_fmt::hint("[", format!("go to r{}", before)));
        }
        spans.extend(ui_fmt::hint("g", format!("go to r{}", detail.revision)));
        spans.extend(ui_fmt::hint("]", format!("go to r{}", detail.revision.next())));
        spans.extend(ui_fmt::hint("Esc", "close".to_string()));
    }
    spans.extend(ui_fmt::hint("R", "recent".to_string()));
    spans.extend(ui_fmt::hint("w", "export".to_string()));
    spans.extend(ui_fmt::hint("q", "quit".to_string()));

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
