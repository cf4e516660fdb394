mod navigator;
mod recent_viewmodel;
mod app_viewmodel;
mod selection;

pub use navigator::{Navigator, NavigationError, SourceView};
pub use recent_viewmodel::RecentViewModel;
pub use app_viewmodel::{AppViewModel, ViewMode, Action, Status};
pub use selection::Selection;
