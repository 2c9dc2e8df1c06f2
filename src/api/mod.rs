//! Backend API
//!
//! HTTP access to the health-tracking backend.

pub mod client;

pub use client::*;
