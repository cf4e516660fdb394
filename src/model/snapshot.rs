use super::{BlameEntry, Revision};

/// File content and blame for one revision: everything needed to render a view
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSnapshot {
    pub url: String,
    pub revision: Revision,
    pub lines: Vec<String>,
    pub blame: Vec<BlameEntry>,
}

/// One displayable line, pairing content with its blame by position
#[derive(Debug, Clone, Copy)]
pub struct SourceRow<'a> {
    /// 1-based line number
    pub number: usize,
    pub code: &'a str,
    pub blame: &'a BlameEntry,
    /// Line was last touched by the revision being viewed
    pub is_current: bool,
}

impl SourceSnapshot {
    /// Rows in source order. Stops at the shorter of lines and blame.
    pub fn rows(&self) -> impl Iterator<Item = SourceRow<'_>> {
        self.lines
            .iter()
            .zip(&self.blame)
            .enumerate()
            .map(move |(index, (code, blame))| SourceRow {
                number: index + 1,
                code,
                blame,
                is_current: blame.revision == self.revision,
            })
    }

    pub fn row_count(&self) -> usize {
        self.lines.len().min(self.blame.len())
    }

    /// Whether every content line has exactly one blame entry
    pub fn is_aligned(&self) -> bool {
        self.lines.len() == self.blame.len()
    }

    /// Revision link token of the row at `index`, as embedded in the HTML
    pub fn link_at(&self, index: usize) -> Option<String> {
        if index >= self.row_count() {
            return None;
        }
        self.blame.get(index).map(|entry| entry.revision.link_token())
    }
}

/// Session navigation state: a fixed target and the revision on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub url: String,
    pub current: Revision,
}

impl NavigationState {
    /// Header text, e.g. `/work/trunk/main.c r42`
    pub fn title(&self) -> String {
        format!("{} r{}", self.url, self.current)
    }
}

/// Verbose log for one revision, shown in the detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionDetail {
    pub revision: Revision,
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn rev(n: u64) -> Revision {
        Revision::new(n).unwrap()
    }

    fn entry(n: u64, author: &str) -> BlameEntry {
        BlameEntry {
            revision: rev(n),
            author: author.to_string(),
            date: datetime!(2024-03-01 10:00:00 UTC),
        }
    }

    fn snapshot(lines: &[&str], blame: Vec<BlameEntry>) -> SourceSnapshot {
        SourceSnapshot {
            url: "/repo/trunk/a.c".to_string(),
            revision: rev(5),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            blame,
        }
    }

    #[test]
    fn test_rows_pair_by_position() {
        let snap = snapshot(
            &["one", "two", "three"],
            vec![entry(3, "alice"), entry(5, "bob"), entry(5, "bob")],
        );

        let rows: Vec<_> = snap.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].code, "one");
        assert!(!rows[0].is_current);
        assert!(rows[1].is_current);
        assert!(rows[2].is_current);
        assert_eq!(rows[2].blame.author, "bob");
        assert!(snap.is_aligned());
    }

    #[test]
    fn test_rows_truncate_to_shorter_side() {
        let more_lines = snapshot(&["a", "b", "c"], vec![entry(1, "x")]);
        assert_eq!(more_lines.rows().count(), 1);
        assert_eq!(more_lines.row_count(), 1);
        assert!(!more_lines.is_aligned());

        let more_blame = snapshot(&["a"], vec![entry(1, "x"), entry(2, "y")]);
        assert_eq!(more_blame.rows().count(), 1);
        assert_eq!(more_blame.link_at(1), None);
    }

    #[test]
    fn test_link_at() {
        let snap = snapshot(&["a", "b"], vec![entry(3, "x"), entry(5, "y")]);
        assert_eq!(snap.link_at(0).as_deref(), Some("r3"));
        assert_eq!(snap.link_at(1).as_deref(), Some("r5"));
        assert_eq!(snap.link_at(2), None);
    }

    #[test]
    fn test_title() {
        let state = NavigationState { url: "/repo/a.c".to_string(), current: rev(12) };
        assert_eq!(state.title(), "/repo/a.c r12");
    }
}
