mod html;

pub use html::{CURRENT_CLASS, escape_html, render_html, render_row};
