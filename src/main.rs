//! DNA Health Tracker
//!
//! Single-page client for a personal health-tracking backend.
//!
//! # Features
//!
//! - User profile creation
//! - Daily wellness logging (mood, sleep, hydration, activity)
//! - Genetic marker records (gene, SNP, risk level)
//! - Aggregated data overview with an email filter
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence and validation live in an external REST
//! backend; the client serializes form input to JSON and renders whatever
//! JSON the backend returns.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
