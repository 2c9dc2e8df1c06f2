//! Application State
//!
//! Shared reactive state for the tabbed shell.

pub mod global;
