use std::borrow::Cow;

use crate::model::{SourceRow, SourceSnapshot};
use crate::util::{expand_tabs, format_commit_time};

/// CSS class on revision links that point at the revision being viewed
pub const CURRENT_CLASS: &str = "current";

const FIELD_SEPARATOR: &str = ", ";
const LINE_NUMBER_WIDTH: usize = 5;
const REVISION_WIDTH: usize = 8;
const AUTHOR_WIDTH: usize = 10;

const DOCUMENT_HEAD: &str = "<html>
<head>
<style>
a.current {
    color: red;
}
</style>
</head>
<body>
";

const DOCUMENT_TAIL: &str = "
</body>
</html>
";

/// Render a snapshot as an annotated HTML document.
///
/// One `<br>`-terminated row per line: line number, revision link,
/// author, code. Output depends only on the snapshot.
pub fn render_html(snapshot: &SourceSnapshot) -> String {
    let rows: Vec<String> = snapshot.rows().map(|row| render_row(&row)).collect();

    let mut document = String::with_capacity(
        DOCUMENT_HEAD.len() + DOCUMENT_TAIL.len() + rows.iter().map(|r| r.len() + 1).sum::<usize>(),
    );
    document.push_str(DOCUMENT_HEAD);
    document.push_str(&rows.join("\n"));
    document.push_str(DOCUMENT_TAIL);
    document
}

pub fn render_row(row: &SourceRow<'_>) -> String {
    let line_number = nbsp(&format!("{:>width$}", row.number, width = LINE_NUMBER_WIDTH));

    let revision = row.blame.revision;
    let class = if row.is_current { CURRENT_CLASS } else { "" };
    let revision_link = format!(
        "<a class='{}' href='{}' title='{}'>{}</a>",
        class,
        revision.link_token(),
        escape_html(&format_commit_time(row.blame.date)),
        nbsp(&format!("{:>width$}", revision, width = REVISION_WIDTH)),
    );

    let author = nbsp(&escape_html(&format!(
        "{:>width$}",
        row.blame.author,
        width = AUTHOR_WIDTH
    )));

    let code = nbsp(&expand_tabs(&escape_html(row.code)));

    [line_number, revision_link, author, code].join(FIELD_SEPARATOR) + "<br>"
}

/// Escape text for use in element content or a quoted attribute
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Keep runs of spaces from collapsing in the browser
fn nbsp(text: &str) -> String {
    text.replace(' ', "&nbsp;")
}
