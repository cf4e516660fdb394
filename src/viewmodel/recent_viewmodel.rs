use crate::model::Revision;

use super::Selection;

/// ViewModel for the recent revisions list
#[derive(Debug, Default)]
pub struct RecentViewModel {
    revisions: Vec<Revision>,
    selection: Selection,
}

impl RecentViewModel {
    /// List `revisions`, with the cursor on `current` when it is among them
    pub fn new(revisions: Vec<Revision>, current: Revision) -> Self {
        let mut selection = Selection::new(revisions.len());
        if let Some(pos) = revisions.iter().position(|r| *r == current) {
            selection.select(pos);
        }
        Self { revisions, selection }
    }

    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn selected_revision(&self) -> Option<Revision> {
        self.revisions.get(self.selection.index()).copied()
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
