//! termfolio library
//!
//! This library provides the pieces of the termfolio terminal portfolio:
//! résumé models, the theme and command menu stores, per-section UI
//! controllers, host integration, and the ratatui front end.

// Module declarations
pub mod branding;
pub mod config;
pub mod controllers;
pub mod logging;
pub mod models;
pub mod platform;
pub mod shortcuts;
pub mod state;
pub mod timers;
pub mod tui;
