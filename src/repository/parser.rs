use serde::Deserialize;

use crate::model::{BlameEntry, Revision};
use crate::util::parse_svn_date;

use super::ParseError;

/// `<commit revision="N"><author/><date/></commit>` as it appears in both
/// `svn info --xml` and `svn annotate --xml`
#[derive(Debug, Deserialize)]
struct CommitNode {
    #[serde(rename = "@revision")]
    revision: Revision,
    author: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfoDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<InfoEntry>,
}

#[derive(Debug, Deserialize)]
struct InfoEntry {
    commit: Option<CommitNode>,
}

#[derive(Debug, Deserialize)]
struct BlameDocument {
    #[serde(rename = "target", default)]
    targets: Vec<BlameTarget>,
}

#[derive(Debug, Deserialize)]
struct BlameTarget {
    #[serde(rename = "entry", default)]
    entries: Vec<BlameLine>,
}

/// One `<entry line-number="N">`. Lines with uncommitted local edits carry no commit.
#[derive(Debug, Deserialize)]
struct BlameLine {
    commit: Option<CommitNode>,
}

/// Parse `svn log -q` output into revision numbers, newest first.
///
/// The quiet format looks like:
/// ```text
/// ------------------------------------------------------------------------
/// r42 | alice | 2024-03-01 10:15:30 +0000 (Fri, 01 Mar 2024)
/// ------------------------------------------------------------------------
/// ```
/// Only lines starting with `r` are entries; the revision is the first
/// pipe-separated field.
pub fn parse_quiet_log(text: &str) -> Result<Vec<Revision>, ParseError> {
    text.lines()
        .filter(|line| line.starts_with('r'))
        .map(|line| {
            let field = line[1..].split('|').next().unwrap_or("").trim();
            field
                .parse::<u64>()
                .ok()
                .and_then(Revision::new)
                .ok_or_else(|| ParseError::BadRevision(line.to_string()))
        })
        .collect()
}

/// Extract `entry/commit@revision` from `svn info --xml`.
pub fn parse_info(xml: &str) -> Result<Revision, ParseError> {
    let document: InfoDocument = quick_xml::de::from_str(xml)?;
    document
        .entries
        .into_iter()
        .next()
        .and_then(|entry| entry.commit)
        .map(|commit| commit.revision)
        .ok_or(ParseError::MissingNode("entry/commit"))
}

/// Extract one BlameEntry per `target/entry/commit`, in document order.
pub fn parse_annotate(xml: &str) -> Result<Vec<BlameEntry>, ParseError> {
    let document: BlameDocument = quick_xml::de::from_str(xml)?;
    document
        .targets
        .into_iter()
        .flat_map(|target| target.entries)
        .filter_map(|line| line.commit)
        .map(|commit| {
            let raw_date = commit.date.ok_or(ParseError::MissingNode("commit/date"))?;
            let date = parse_svn_date(&raw_date).ok_or(ParseError::BadDate(raw_date))?;
            Ok(BlameEntry {
                revision: commit.revision,
                // svn omits <author> for anonymous commits
                author: commit.author.unwrap_or_default(),
                date,
            })
        })
        .collect()
}

/// Split `svn cat` output into display lines.
///
/// A trailing newline does not produce an extra empty line, and CRLF
/// endings are stripped, so the count matches svn's annotate output.
pub fn split_content(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
