//! Pages
//!
//! Top-level panel components, one per tab.

pub mod form;
pub mod health_log;
pub mod markers;
pub mod overview;
pub mod profile;

pub use health_log::HealthLogForm;
pub use markers::MarkerForm;
pub use overview::DataOverview;
pub use profile::ProfileForm;
