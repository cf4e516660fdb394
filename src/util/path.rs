use std::io;
use std::path::{Path, PathBuf};

use crate::model::Revision;

/// Resolve the command-line target to the identifier handed to svn.
///
/// Repository URLs (anything with a scheme, e.g. `svn://`, `https://`,
/// `file://`) pass through untouched; local paths are made absolute.
pub fn resolve_target(raw: &str) -> io::Result<String> {
    if raw.contains("://") {
        return Ok(raw.to_string());
    }
    let absolute = std::path::absolute(Path::new(raw))?;
    Ok(absolute.to_string_lossy().into_owned())
}

/// File name for an exported HTML view, e.g. `main.c-r42.html`
pub fn export_file_name(target: &str, revision: Revision) -> PathBuf {
    let base = target
        .trim_end_matches('/')
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("source");
    PathBuf::from(format!("{}-r{}.html", base, revision))
}
