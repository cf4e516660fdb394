use std::borrow::Cow;

use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Columns a horizontal tab expands to
pub const TAB_WIDTH: usize = 4;

/// Replace every tab with `TAB_WIDTH` spaces
pub fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Parse an svn XML timestamp such as `2024-03-01T10:15:30.123456Z`.
///
/// Only the seconds-resolution prefix is used; svn always reports UTC.
pub fn parse_svn_date(text: &str) -> Option<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let prefix = text.trim().get(..19)?;
    PrimitiveDateTime::parse(prefix, &format)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Format as `YYYY-MM-DD HH:MM:SS`
pub fn format_commit_time(date: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    date.format(&format).unwrap_or_else(|_| "unknown".to_string())
}

/// Format as `YYYY-MM-DD`
pub fn format_commit_date(date: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    date.format(&format).unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("a\tb"), "a    b");
        assert_eq!(expand_tabs("\t\tx"), "        x");
        assert!(matches!(expand_tabs("no tabs"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_parse_svn_date() {
        let parsed = parse_svn_date("2024-03-01T10:15:30.123456Z").unwrap();
        assert_eq!(parsed, datetime!(2024-03-01 10:15:30 UTC));

        assert_eq!(
            parse_svn_date("2009-12-31T23:59:59Z"),
            Some(datetime!(2009-12-31 23:59:59 UTC))
        );
    }

    #[test]
    fn test_parse_svn_date_rejects_garbage() {
        assert_eq!(parse_svn_date(""), None);
        assert_eq!(parse_svn_date("2024-03-01"), None);
        assert_eq!(parse_svn_date("yesterday at noon, roughly"), None);
    }

    #[test]
    fn test_format_commit_time() {
        let dt = datetime!(2024-03-01 10:15:30 UTC);
        assert_eq!(format_commit_time(dt), "2024-03-01 10:15:30");
        assert_eq!(format_commit_date(dt), "2024-03-01");
    }
}
