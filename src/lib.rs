//! Termfolio library
//!
//! This library provides the core functionality for the Termfolio terminal
//! portfolio: theme resolution and the session theme provider, the project
//! catalog and filter state, and the contact form state machine.

// Module declarations
pub mod branding;
pub mod config;
pub mod models;
pub mod tui;
