use std::fmt;
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// svn subcommand an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RecentLog,
    Info,
    Cat,
    Annotate,
    VerboseLog,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::RecentLog => "log -q",
            Operation::Info => "info",
            Operation::Cat => "cat",
            Operation::Annotate => "annotate",
            Operation::VerboseLog => "log -v",
        };
        f.write_str(name)
    }
}

/// Failure of a single svn query
#[derive(Debug, Error)]
pub enum VcsError {
    /// svn exited non-zero, or printed output we could not make sense of
    #[error("svn {operation} failed for {target}: {detail}")]
    Protocol {
        operation: Operation,
        target: String,
        detail: String,
    },

    #[error("svn {operation} returned output that is not valid UTF-8 for {target}")]
    Encoding {
        operation: Operation,
        target: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("could not launch {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Why svn output could not be parsed
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("missing {0} element")]
    MissingNode(&'static str),

    #[error("bad revision field {0:?}")]
    BadRevision(String),

    #[error("bad commit date {0:?}")]
    BadDate(String),
}
