//! UI Components
//!
//! Reusable Leptos components for the shell.

pub mod hero;
pub mod record_list;
pub mod tab_bar;

pub use hero::Hero;
pub use record_list::RecordList;
pub use tab_bar::TabBar;
