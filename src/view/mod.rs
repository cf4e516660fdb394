mod source_view;
mod recent_view;
mod ui_fmt;

pub use source_view::{detail_pane_height, render as render_source, DETAIL_PANE_ROWS};
pub use recent_view::render as render_recent;
