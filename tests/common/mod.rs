// Shared test fixtures for integration tests
// A scripted svn stand-in so nothing here needs a real repository
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use svn_timemachine::repository::{CommandOutput, CommandRunner, VcsError};

pub const URL: &str = "/work/trunk/main.c";

/// Replays canned svn output keyed by subcommand and `-r` revision.
/// Anything not scripted fails the way svn does for a missing revision.
#[derive(Default)]
pub struct StubRunner {
    responses: HashMap<(String, Option<u64>), CommandOutput>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl StubRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, command: &str, revision: Option<u64>, output: CommandOutput) -> Self {
        self.responses.insert((command.to_string(), revision), output);
        self
    }

    /// Script `svn info` to report `revision` as the last change
    pub fn with_head(self, revision: u64) -> Self {
        self.on("info", None, CommandOutput::ok(info_xml(revision)))
    }

    /// Script `svn log -q` to list `revisions`
    pub fn with_recent(self, revisions: &[u64]) -> Self {
        self.on("log -q", None, CommandOutput::ok(quiet_log(revisions)))
    }

    /// Script cat, annotate and verbose log for one revision
    pub fn with_revision(self, revision: u64, lines: &[&str], blame: &[(u64, &str)]) -> Self {
        let mut content = lines.join("\n");
        content.push('\n');
        self.on("cat", Some(revision), CommandOutput::ok(content))
            .on("annotate", Some(revision), CommandOutput::ok(annotate_xml(blame)))
            .on("log -v", Some(revision), CommandOutput::ok(verbose_log(revision)))
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for StubRunner {
    fn run(&self, args: &[String]) -> Result<CommandOutput, VcsError> {
        self.calls.borrow_mut().push(args.to_vec());

        let command = match args[0].as_str() {
            "log" if args.iter().any(|a| a == "-v") => "log -v".to_string(),
            "log" => "log -q".to_string(),
            other => other.to_string(),
        };
        let revision = args
            .iter()
            .position(|a| a == "-r")
            .and_then(|i| args.get(i + 1))
            .and_then(|r| r.parse::<u64>().ok());

        Ok(self
            .responses
            .get(&(command, revision))
            .cloned()
            .unwrap_or_else(|| CommandOutput::failed("svn: E160006: No such revision")))
    }
}

pub fn svn_date(revision: u64) -> String {
    format!("2024-01-{:02}T12:00:00.000000Z", revision % 28 + 1)
}

pub fn info_xml(revision: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<info>
<entry kind="file" path="main.c" revision="{head}">
<url>svn://example.org/repo/trunk/main.c</url>
<commit revision="{revision}">
<author>alice</author>
<date>{date}</date>
</commit>
</entry>
</info>
"#,
        head = revision + 3,
        revision = revision,
        date = svn_date(revision),
    )
}

pub fn annotate_xml(blame: &[(u64, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<blame>\n<target path=\"main.c\">\n");
    for (index, (revision, author)) in blame.iter().enumerate() {
        xml.push_str(&format!(
            "<entry line-number=\"{}\">\n<commit revision=\"{}\">\n<author>{}</author>\n<date>{}</date>\n</commit>\n</entry>\n",
            index + 1,
            revision,
            author,
            svn_date(*revision),
        ));
    }
    xml.push_str("</target>\n</blame>\n");
    xml
}

pub fn quiet_log(revisions: &[u64]) -> String {
    let rule = "-".repeat(72);
    let mut text = format!("{}\n", rule);
    for revision in revisions {
        text.push_str(&format!(
            "r{} | alice | 2024-01-01 12:00:00 +0000 (Mon, 01 Jan 2024)\n{}\n",
            revision, rule
        ));
    }
    text
}

pub fn verbose_log(revision: u64) -> String {
    format!(
        "------------------------------------------------------------------------\n\
         r{} | alice | 2024-01-01 12:00:00 +0000 (Mon, 01 Jan 2024) | 1 line\n\
         Changed paths:\n   M /trunk/main.c\n\nChange number {}\n\
         ------------------------------------------------------------------------\n",
        revision, revision
    )
}

/// Three revisions of a small file:
/// r3 adds two lines, r4 edits line 2, r5 edits line 3
pub fn three_revision_history() -> StubRunner {
    StubRunner::new()
        .with_head(5)
        .with_recent(&[5, 4, 3])
        .with_revision(3, &["int a;", "int b;"], &[(3, "alice"), (3, "alice")])
        .with_revision(4, &["int a;", "long b;", "int c;"], &[(3, "alice"), (4, "bob"), (4, "bob")])
        .with_revision(5, &["int a;", "long b;", "int <c> & d;"], &[(3, "alice"), (4, "bob"), (5, "carol")])
}
