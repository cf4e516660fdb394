use thiserror::Error;

use crate::model::{NavigationState, Revision, RevisionDetail, SourceSnapshot};
use crate::render::render_html;
use crate::repository::{CommandRunner, SvnClient, VcsError};

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Vcs(#[from] VcsError),

    #[error("there is no revision before r1")]
    BeforeFirstRevision,
}

/// A rendered source view: the snapshot and its HTML document
#[derive(Debug, Clone)]
pub struct SourceView {
    pub snapshot: SourceSnapshot,
    pub html: String,
}

/// Tracks the revision on screen and moves it through the file's history.
///
/// Every move fetches and renders the target revision completely before
/// touching any state, so a failed move leaves the previous view intact.
pub struct Navigator<R> {
    client: SvnClient<R>,
    state: NavigationState,
    view: SourceView,
    detail: Option<RevisionDetail>,
}

impl<R: CommandRunner> Navigator<R> {
    /// Open the file at `start`, or at its latest revision when None
    pub fn open(client: SvnClient<R>, start: Option<Revision>) -> Result<Self, NavigationError> {
        let revision = match start {
            Some(revision) => revision,
            None => client.latest_revision()?,
        };
        let view = load_view(&client, revision)?;
        tracing::info!(url = %client.url(), %revision, "opened");

        let state = NavigationState {
            url: client.url().to_string(),
            current: revision,
        };
        Ok(Self {
            client,
            state,
            view,
            detail: None,
        })
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_revision(&self) -> Revision {
        self.state.current
    }

    pub fn view(&self) -> &SourceView {
        &self.view
    }

    pub fn html(&self) -> &str {
        &self.view.html
    }

    /// Revision log shown in the detail pane, if one was selected
    pub fn detail(&self) -> Option<&RevisionDetail> {
        self.detail.as_ref()
    }

    pub fn client(&self) -> &SvnClient<R> {
        &self.client
    }

    pub fn go_to_revision(&mut self, revision: Revision) -> Result<&SourceView, NavigationError> {
        let view = load_view(&self.client, revision)?;
        tracing::info!(from = %self.state.current, to = %revision, "navigated");
        self.view = view;
        self.state.current = revision;
        Ok(&self.view)
    }

    /// Move to the following revision. Not checked against the head: svn reports
    /// the failure when it does not exist.
    pub fn next(&mut self) -> Result<&SourceView, NavigationError> {
        self.go_to_revision(self.state.current.next())
    }

    pub fn previous(&mut self) -> Result<&SourceView, NavigationError> {
        let revision = self
            .state
            .current
            .previous()
            .ok_or(NavigationError::BeforeFirstRevision)?;
        self.go_to_revision(revision)
    }

    /// Re-fetch and re-render the current revision
    pub fn current(&mut self) -> Result<&SourceView, NavigationError> {
        self.go_to_revision(self.state.current)
    }

    /// Handle a clicked link. `r<digits>` loads that revision's verbose log into
    /// the detail pane; any other link is ignored and returns None.
    ///
    /// The source view and current revision are left alone.
    pub fn select_revision_link(&mut self, token: &str) -> Result<Option<&RevisionDetail>, NavigationError> {
        let Some(revision) = Revision::from_link_token(token) else {
            tracing::debug!(token, "ignoring non-revision link");
            return Ok(None);
        };
        let log = self.client.verbose_log(revision)?;
        tracing::info!(%revision, "showing revision details");
        let detail = self.detail.insert(RevisionDetail { revision, log });
        Ok(Some(&*detail))
    }

    /// Navigate the source view to the revision shown in the detail pane
    pub fn go_to_detail_revision(&mut self) -> Result<Option<&SourceView>, NavigationError> {
        match self.detail.as_ref().map(|detail| detail.revision) {
            Some(revision) => self.go_to_revision(revision).map(Some),
            None => Ok(None),
        }
    }

    /// Navigate to the revision just before the one in the detail pane,
    /// i.e. the file as it was before that change
    pub fn go_to_detail_previous(&mut self) -> Result<Option<&SourceView>, NavigationError> {
        match self.detail.as_ref().map(|detail| detail.revision) {
            Some(revision) => {
                let target = revision.previous().ok_or(NavigationError::BeforeFirstRevision)?;
                self.go_to_revision(target).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Navigate to the revision just after the one in the detail pane
    pub fn go_to_detail_next(&mut self) -> Result<Option<&SourceView>, NavigationError> {
        match self.detail.as_ref().map(|detail| detail.revision) {
            Some(revision) => self.go_to_revision(revision.next()).map(Some),
            None => Ok(None),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn recent_revisions(&self) -> Result<Vec<Revision>, NavigationError> {
        Ok(self.client.list_recent_revisions()?)
    }
}

fn load_view<R: CommandRunner>(client: &SvnClient<R>, revision: Revision) -> Result<SourceView, NavigationError> {
    let snapshot = client.snapshot(revision)?;
    let html = render_html(&snapshot);
    Ok(SourceView { snapshot, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CommandOutput;
    use std::cell::Cell;

    /// Serves a one-line file at every revision up to `head`, blamed to that
    /// revision; anything newer fails the way svn does.
    struct LinearHistory {
        head: u64,
        calls: Cell<usize>,
    }

    impl LinearHistory {
        fn new(head: u64) -> Self {
            Self { head, calls: Cell::new(0) }
        }
    }

    impl CommandRunner for LinearHistory {
        fn run(&self, args: &[String]) -> Result<CommandOutput, VcsError> {
            self.calls.set(self.calls.get() + 1);
            let rev = args
                .iter()
                .position(|a| a == "-r")
                .and_then(|i| args.get(i + 1))
                .and_then(|r| r.parse::<u64>().ok());

            let output = match (args[0].as_str(), rev) {
                ("info", _) => CommandOutput::ok(format!(
                    "<info><entry><commit revision=\"{}\"><author>a</author><date>2024-01-01T00:00:00Z</date></commit></entry></info>",
                    self.head
                )),
                (_, Some(r)) if r > self.head => CommandOutput::failed(format!("svn: E160006: No such revision {}", r)),
                ("cat", Some(r)) => CommandOutput::ok(format!("line at {}\n", r)),
                ("annotate", Some(r)) => CommandOutput::ok(format!(
                    "<blame><target path=\"a\"><entry line-number=\"1\"><commit revision=\"{}\"><author>a</author><date>2024-01-01T00:00:00Z</date></commit></entry></target></blame>",
                    r
                )),
                ("log", Some(r)) => CommandOutput::ok(format!("r{} | a | date\n\nmessage {}\n", r, r)),
                _ => CommandOutput::failed("unexpected"),
            };
            Ok(output)
        }
    }

    fn rev(n: u64) -> Revision {
        Revision::new(n).unwrap()
    }

    fn open(head: u64) -> Navigator<LinearHistory> {
        Navigator::open(SvnClient::new(LinearHistory::new(head), "/repo/a.c"), None).unwrap()
    }

    #[test]
    fn test_opens_at_latest_revision() {
        let nav = open(7);
        assert_eq!(nav.current_revision(), rev(7));
        assert_eq!(nav.state().title(), "/repo/a.c r7");
        assert_eq!(nav.view().snapshot.lines, vec!["line at 7"]);
        assert!(nav.detail().is_none());
    }

    #[test]
    fn test_opens_at_requested_revision() {
        let client = SvnClient::new(LinearHistory::new(7), "/repo/a.c");
        let nav = Navigator::open(client, Some(rev(3))).unwrap();
        assert_eq!(nav.current_revision(), rev(3));
    }

    #[test]
    fn test_previous_and_next() {
        let mut nav = open(7);
        nav.previous().unwrap();
        nav.previous().unwrap();
        assert_eq!(nav.current_revision(), rev(5));

        nav.next().unwrap();
        assert_eq!(nav.current_revision(), rev(6));
        assert!(nav.html().contains("line&nbsp;at&nbsp;6"));
    }

    #[test]
    fn test_next_past_head_keeps_previous_view() {
        let mut nav = open(7);
        let before = nav.html().to_string();

        let err = nav.next().unwrap_err();
        assert!(matches!(err, NavigationError::Vcs(VcsError::Protocol { .. })));
        assert_eq!(nav.current_revision(), rev(7));
        assert_eq!(nav.html(), before);
    }

    #[test]
    fn test_previous_from_first_revision() {
        let history = LinearHistory::new(3);
        let mut nav = Navigator::open(SvnClient::new(&history, "/repo/a.c"), Some(rev(1))).unwrap();
        let calls_before = history.calls.get();

        let err = nav.previous().unwrap_err();
        assert!(matches!(err, NavigationError::BeforeFirstRevision));
        assert_eq!(nav.current_revision(), rev(1));
        assert_eq!(history.calls.get(), calls_before);
    }

    #[test]
    fn test_current_is_idempotent() {
        let mut nav = open(4);
        let first = nav.current().unwrap().html.clone();
        let second = nav.current().unwrap().html.clone();
        assert_eq!(first, second);
        assert_eq!(nav.current_revision(), rev(4));
    }

    #[test]
    fn test_revision_link_opens_detail_without_moving() {
        let mut nav = open(7);
        let detail = nav.select_revision_link("r3").unwrap().unwrap();
        assert_eq!(detail.revision, rev(3));
        assert!(detail.log.contains("message 3"));
        assert_eq!(nav.current_revision(), rev(7));

        nav.go_to_detail_revision().unwrap();
        assert_eq!(nav.current_revision(), rev(3));

        nav.close_detail();
        assert!(nav.detail().is_none());
        assert!(nav.go_to_detail_revision().unwrap().is_none());
    }

    #[test]
    fn test_detail_neighbours() {
        let mut nav = open(7);
        assert!(nav.go_to_detail_previous().unwrap().is_none());
        assert!(nav.go_to_detail_next().unwrap().is_none());

        nav.select_revision_link("r4").unwrap();
        nav.go_to_detail_previous().unwrap();
        assert_eq!(nav.current_revision(), rev(3));

        // Still relative to r4, not to the revision now on screen
        nav.go_to_detail_next().unwrap();
        assert_eq!(nav.current_revision(), rev(5));
    }

    #[test]
    fn test_detail_previous_of_first_revision() {
        let history = LinearHistory::new(7);
        let mut nav = Navigator::open(SvnClient::new(&history, "/repo/a.c"), None).unwrap();
        nav.select_revision_link("r1").unwrap();
        let calls_before = history.calls.get();

        let err = nav.go_to_detail_previous().unwrap_err();
        assert!(matches!(err, NavigationError::BeforeFirstRevision));
        assert_eq!(nav.current_revision(), rev(7));
        assert_eq!(history.calls.get(), calls_before);
    }

    #[test]
    fn test_detail_next_past_head_keeps_view() {
        let mut nav = open(7);
        nav.select_revision_link("r7").unwrap();
        assert!(matches!(nav.go_to_detail_next(), Err(NavigationError::Vcs(_))));
        assert_eq!(nav.current_revision(), rev(7));
    }

    #[test]
    fn test_non_revision_links_are_ignored() {
        let mut nav = open(7);
        assert!(nav.select_revision_link("http://example.com").unwrap().is_none());
        assert!(nav.select_revision_link("r").unwrap().is_none());
        assert!(nav.detail().is_none());
    }
}
