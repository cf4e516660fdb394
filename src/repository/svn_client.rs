use crate::model::{BlameEntry, Revision, SourceSnapshot};

use super::parser::{parse_annotate, parse_info, parse_quiet_log, split_content};
use super::{CommandRunner, Operation, ParseError, VcsError};

/// How many entries `list_recent_revisions` asks for by default
pub const DEFAULT_LOG_LIMIT: usize = 10;

/// Queries one versioned file through the svn command-line client
pub struct SvnClient<R> {
    runner: R,
    url: String,
    log_limit: usize,
}

impl<R: CommandRunner> SvnClient<R> {
    pub fn new(runner: R, url: impl Into<String>) -> Self {
        Self {
            runner,
            url: url.into(),
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }

    pub fn with_log_limit(mut self, limit: usize) -> Self {
        self.log_limit = limit.max(1);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The newest revisions that touched the file, newest first
    pub fn list_recent_revisions(&self) -> Result<Vec<Revision>, VcsError> {
        let args = vec![
            "log".to_string(),
            "-q".to_string(),
            "--limit".to_string(),
            self.log_limit.to_string(),
            self.url.clone(),
        ];
        let text = self.run_text(Operation::RecentLog, None, &args)?;
        parse_quiet_log(&text).map_err(|e| self.protocol(Operation::RecentLog, None, e))
    }

    /// Revision in which the file last changed
    pub fn latest_revision(&self) -> Result<Revision, VcsError> {
        let args = vec!["info".to_string(), "--xml".to_string(), self.url.clone()];
        let xml = self.run_text(Operation::Info, None, &args)?;
        parse_info(&xml).map_err(|e| self.protocol(Operation::Info, None, e))
    }

    pub fn content_at_revision(&self, revision: Revision) -> Result<Vec<String>, VcsError> {
        let args = vec![
            "cat".to_string(),
            "-r".to_string(),
            revision.to_string(),
            self.url.clone(),
        ];
        let text = self.run_text(Operation::Cat, Some(revision), &args)?;
        Ok(split_content(&text))
    }

    pub fn blame_at_revision(&self, revision: Revision) -> Result<Vec<BlameEntry>, VcsError> {
        let args = vec![
            "annotate".to_string(),
            "--xml".to_string(),
            "-r".to_string(),
            revision.to_string(),
            self.url.clone(),
        ];
        let xml = self.run_text(Operation::Annotate, Some(revision), &args)?;
        parse_annotate(&xml).map_err(|e| self.protocol(Operation::Annotate, Some(revision), e))
    }

    /// Full `svn log -v` text for one revision, unmodified
    pub fn verbose_log(&self, revision: Revision) -> Result<String, VcsError> {
        let args = vec![
            "log".to_string(),
            "-v".to_string(),
            "-r".to_string(),
            revision.to_string(),
            self.url.clone(),
        ];
        self.run_text(Operation::VerboseLog, Some(revision), &args)
    }

    /// Content plus blame at `revision`
    pub fn snapshot(&self, revision: Revision) -> Result<SourceSnapshot, VcsError> {
        let lines = self.content_at_revision(revision)?;
        let blame = self.blame_at_revision(revision)?;

        let snapshot = SourceSnapshot {
            url: self.url.clone(),
            revision,
            lines,
            blame,
        };
        if !snapshot.is_aligned() {
            tracing::warn!(
                url = %self.url,
                %revision,
                lines = snapshot.lines.len(),
                blame = snapshot.blame.len(),
                "line and blame counts differ, showing the overlapping prefix"
            );
        }
        Ok(snapshot)
    }

    fn run_text(
        &self,
        operation: Operation,
        revision: Option<Revision>,
        args: &[String],
    ) -> Result<String, VcsError> {
        let output = self.runner.run(args)?;

        if !output.success {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = match (stderr.trim(), output.code) {
                ("", Some(code)) => format!("exit status {}", code),
                ("", None) => "terminated by signal".to_string(),
                (message, _) => message.to_string(),
            };
            return Err(VcsError::Protocol {
                operation,
                target: self.target(revision),
                detail,
            });
        }

        String::from_utf8(output.stdout).map_err(|source| VcsError::Encoding {
            operation,
            target: self.target(revision),
            source,
        })
    }

    fn protocol(&self, operation: Operation, revision: Option<Revision>, error: ParseError) -> VcsError {
        VcsError::Protocol {
            operation,
            target: self.target(revision),
            detail: error.to_string(),
        }
    }

    fn target(&self, revision: Option<Revision>) -> String {
        match revision {
            Some(rev) => format!("{}@r{}", self.url, rev),
            None => self.url.clone(),
        }
    }
}
