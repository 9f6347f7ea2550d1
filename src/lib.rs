//! Terminal view of an editable company profile.
//!
//! The profile's four text fields share one edit flag; the service list is
//! read from an injected [`core::ServiceSource`] and never written.

pub mod app;
pub mod cli;
pub mod core;
pub mod screens;
pub mod utils;
pub mod widgets;

pub use app::App;
