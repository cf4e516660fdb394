mod format;
mod path;

pub use format::{TAB_WIDTH, expand_tabs, format_commit_date, format_commit_time, parse_svn_date};
pub use path::{export_file_name, resolve_target};
