mod error;
mod parser;
mod runner;
mod svn_client;

pub use error::{Operation, ParseError, VcsError};
pub use parser::{parse_annotate, parse_info, parse_quiet_log, split_content};
pub use runner::{CommandOutput, CommandRunner, SvnProcess};
pub use svn_client::{DEFAULT_LOG_LIMIT, SvnClient};
