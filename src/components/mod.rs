//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod filter_tabs;
mod footer;
mod header;
mod status_select;
mod task_details_dialog;
mod task_item;
mod task_list;

pub use error_banner::ErrorBanner;
pub use filter_tabs::{FilterTabs, TaskFilter};
pub use footer::Footer;
pub use header::Header;
pub use status_select::StatusSelect;
pub use task_details_dialog::TaskDetailsDialog;
pub use task_item::TaskItem;
pub use task_list::TaskListView;
