use std::fmt::Display;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::input::Intent;
use crate::model::{RevisionDetail, SourceSnapshot};
use crate::repository::CommandRunner;
use crate::util::export_file_name;
use super::{Navigator, RecentViewModel, Selection};

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Source,
    Recent,
}

/// Action to take after handling an intent
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Redraw,
    Quit,
}

/// Message shown in the status line
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Main application ViewModel: the navigator plus cursor and pane state
pub struct AppViewModel<R> {
    navigator: Navigator<R>,
    view_mode: ViewMode,
    source_selection: Selection,
    recent_vm: RecentViewModel,
    status: Option<Status>,
    export_dir: PathBuf,
    page_size: usize,
}

impl<R: CommandRunner> AppViewModel<R> {
    pub fn new(navigator: Navigator<R>, export_dir: PathBuf) -> Self {
        let source_selection = Selection::new(navigator.view().snapshot.row_count());
        Self {
            navigator,
            view_mode: ViewMode::Source,
            source_selection,
            recent_vm: RecentViewModel::default(),
            status: None,
            export_dir,
            page_size: 20,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn navigator(&self) -> &Navigator<R> {
        &self.navigator
    }

    pub fn snapshot(&self) -> &SourceSnapshot {
        &self.navigator.view().snapshot
    }

    pub fn detail(&self) -> Option<&RevisionDetail> {
        self.navigator.detail()
    }

    pub fn title(&self) -> String {
        self.navigator.state().title()
    }

    pub fn selected_row(&self) -> usize {
        self.source_selection.index()
    }

    pub fn recent_vm(&self) -> &RecentViewModel {
        &self.recent_vm
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Rows moved by PageUp/PageDown, set from the terminal height
    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
    }

    /// Get the ViewMode as input::ViewMode for key mapping
    pub fn input_view_mode(&self) -> crate::input::ViewMode {
        match self.view_mode {
            ViewMode::Source => crate::input::ViewMode::Source,
            ViewMode::Recent => crate::input::ViewMode::Recent,
        }
    }

    /// Handle a user intent and return the action to take
    pub fn handle_intent(&mut self, intent: Intent) -> Action {
        if intent == Intent::Quit {
            return Action::Quit;
        }
        match self.view_mode {
            ViewMode::Source => self.handle_source_intent(intent),
            ViewMode::Recent => self.handle_recent_intent(intent),
        }
        Action::Redraw
    }

    fn handle_source_intent(&mut self, intent: Intent) {
        let page = self.page_size;
        match intent {
            Intent::MoveUp => self.source_selection.move_up(),
            Intent::MoveDown => self.source_selection.move_down(),
            Intent::PageUp => self.source_selection.page_up(page),
            Intent::PageDown => self.source_selection.page_down(page),
            Intent::Top => self.source_selection.first(),
            Intent::Bottom => self.source_selection.last(),

            Intent::NextRevision => {
                let result = self.navigator.next().map(|_| ());
                self.after_navigation(result);
            }
            Intent::PreviousRevision => {
                let result = self.navigator.previous().map(|_| ());
                self.after_navigation(result);
            }
            Intent::Refresh => {
                let result = self.navigator.current().map(|_| ());
                self.after_navigation(result);
            }
            Intent::GoToDetailRevision => {
                let result = self.navigator.go_to_detail_revision().map(|_| ());
                self.after_navigation(result);
            }
            Intent::GoToDetailPrevious => {
                let result = self.navigator.go_to_detail_previous().map(|_| ());
                self.after_navigation(result);
            }
            Intent::GoToDetailNext => {
                let result = self.navigator.go_to_detail_next().map(|_| ());
                self.after_navigation(result);
            }

            Intent::OpenLink => {
                let Some(link) = self.snapshot().link_at(self.source_selection.index()) else {
                    return;
                };
                match self.navigator.select_revision_link(&link).map(|_| ()) {
                    Ok(()) => self.status = None,
                    Err(err) => self.report(err),
                }
            }

            Intent::Back => self.navigator.close_detail(),

            Intent::ShowRecent => match self.navigator.recent_revisions() {
                Ok(revisions) => {
                    self.recent_vm = RecentViewModel::new(revisions, self.navigator.current_revision());
                    self.view_mode = ViewMode::Recent;
                    self.status = None;
                }
                Err(err) => self.report(err),
            },

            Intent::ExportHtml => match self.export_html() {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "exported HTML");
                    self.status = Some(Status::Info(format!("Wrote {}", path.display())));
                }
                Err(err) => self.report(err),
            },

            Intent::Quit => {}
        }
    }

    fn handle_recent_intent(&mut self, intent: Intent) {
        let page = self.page_size;
        let selection = self.recent_vm.selection_mut();
        match intent {
            Intent::MoveUp => selection.move_up(),
            Intent::MoveDown => selection.move_down(),
            Intent::PageUp => selection.page_up(page),
            Intent::PageDown => selection.page_down(page),
            Intent::Top => selection.first(),
            Intent::Bottom => selection.last(),
            Intent::OpenLink => {
                if let Some(revision) = self.recent_vm.selected_revision() {
                    let result = self.navigator.go_to_revision(revision).map(|_| ());
                    self.after_navigation(result);
                }
                self.view_mode = ViewMode::Source;
            }
            Intent::Back => self.view_mode = ViewMode::Source,
            _ => {}
        }
    }

    /// Write the current HTML document to the export directory
    pub fn export_html(&self) -> io::Result<PathBuf> {
        let state = self.navigator.state();
        fs::create_dir_all(&self.export_dir)?;
        let path = self.export_dir.join(export_file_name(&state.url, state.current));
        fs::write(&path, self.navigator.html())?;
        Ok(path)
    }

    fn after_navigation<E: Display>(&mut self, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.source_selection.resize(self.snapshot().row_count());
                self.status = None;
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: impl Display) {
        tracing::warn!(error = %err, "action failed");
        self.status = Some(Status::Error(err.to_string()));
    }
}
