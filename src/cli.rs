use clap::Parser;

use crate::model::Revision;

#[derive(Parser, Debug)]
#[command(name = "svn-timemachine", about = "Browse the history of a file under Subversion with inline blame")]
pub struct Cli {
    /// File path in a working copy, or a repository URL
    pub target: String,

    /// Start at this revision instead of the latest change
    #[arg(short, long)]
    pub revision: Option<Revision>,

    /// Number of revisions in the recent-changes list
    #[arg(long)]
    pub limit: Option<usize>,

    /// svn executable to run (default: $SVN_TIMEMACHINE_SVN or `svn`)
    #[arg(long)]
    pub svn: Option<String>,

    /// Print the annotated HTML view to stdout and exit
    #[arg(long, conflicts_with_all = ["recent", "details"])]
    pub html: bool,

    /// Print the recent revisions of the target and exit
    #[arg(long, conflicts_with = "details")]
    pub recent: bool,

    /// Print the verbose log of one revision and exit
    #[arg(long, value_name = "REV")]
    pub details: Option<Revision>,
}
