use time::OffsetDateTime;

use super::Revision;

/// Attribution for a single source line: who last changed it, and when
#[derive(Debug, Clone, PartialEq)]
pub struct BlameEntry {
    pub revision: Revision,
    pub author: String,
    pub date: OffsetDateTime,
}
