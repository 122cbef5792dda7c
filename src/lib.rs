//! signup-wizard - Multi-step subscription sign-up in the terminal
//!
//! The library exposes the wizard controller for the `generate_types`
//! binary, the integration tests, and any other front end that wants to
//! drive the same state machine.

pub mod app;
pub mod config;
pub mod logging;
pub mod quote;
pub mod ui;
pub mod wizard;
