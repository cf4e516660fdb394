use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if a KeyCode is the expected character.
/// Uppercase expectations are case-sensitive, lowercase ones are not.
pub fn key_matches(key: &KeyCode, expected: char) -> bool {
    match key {
        KeyCode::Char(c) if expected.is_uppercase() => *c == expected,
        KeyCode::Char(c) => c.to_ascii_lowercase() == expected,
        _ => false,
    }
}

/// User intents derived from keyboard input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    // Cursor
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Top,
    Bottom,

    // History navigation
    NextRevision,
    PreviousRevision,
    Refresh,
    /// Follow the revision link of the selected row
    OpenLink,
    GoToDetailRevision,
    GoToDetailPrevious,
    GoToDetailNext,
    Back,

    ShowRecent,
    ExportHtml,
    Quit,
}

/// View modes for mapping keys to intents
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Source,
    Recent,
}

/// Map a key event to a user intent for the current view mode
pub fn map_key_to_intent(key: &KeyEvent, mode: ViewMode) -> Option<Intent> {
    let code = &key.code;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key_matches(code, 'c') {
        return Some(Intent::Quit);
    }
    if key_matches(code, 'q') {
        return Some(Intent::Quit);
    }

    match code {
        KeyCode::Up => return Some(Intent::MoveUp),
        KeyCode::Down => return Some(Intent::MoveDown),
        KeyCode::PageUp => return Some(Intent::PageUp),
        KeyCode::PageDown => return Some(Intent::PageDown),
        KeyCode::Home => return Some(Intent::Top),
        KeyCode::End => return Some(Intent::Bottom),
        KeyCode::Esc => return Some(Intent::Back),
        _ => {}
    }
    if key_matches(code, 'k') {
        return Some(Intent::MoveUp);
    }
    if key_matches(code, 'j') {
        return Some(Intent::MoveDown);
    }

    match mode {
        ViewMode::Source => {
            if *code == KeyCode::Enter {
                return Some(Intent::OpenLink);
            }
            if *code == KeyCode::Right || key_matches(code, 'n') {
                return Some(Intent::NextRevision);
            }
            if *code == KeyCode::Left || key_matches(code, 'p') {
                return Some(Intent::PreviousRevision);
            }
            if key_matches(code, 'c') {
                return Some(Intent::Refresh);
            }
            if key_matches(code, 'g') {
                return Some(Intent::GoToDetailRevision);
            }
            if *code == KeyCode::Char('[') {
                return Some(Intent::GoToDetailPrevious);
            }
            if *code == KeyCode::Char(']') {
                return Some(Intent::GoToDetailNext);
            }
            if key_matches(code, 'R') {
                return Some(Intent::ShowRecent);
            }
            if key_matches(code, 'w') {
                return Some(Intent::ExportHtml);
            }
            None
        }
        ViewMode::Recent => {
            if *code == KeyCode::Enter {
                return Some(Intent::OpenLink);
            }
            if key_matches(code, 'R') {
                return Some(Intent::Back);
            }
            None
        }
    }
}
