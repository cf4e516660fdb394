mod revision;
mod blame;
mod snapshot;

pub use revision::{Revision, InvalidRevision};
pub use blame::BlameEntry;
pub use snapshot::{SourceSnapshot, SourceRow, NavigationState, RevisionDetail};
