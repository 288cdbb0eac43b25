//! Demo request form
//!
//! A three-step lead capture form: contact details, current software and
//! business qualifiers. Values live in a field store, steps advance only
//! when their validation passes, and the final step submits the whole
//! record as JSON to an HTTP endpoint.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod host;
pub mod state;
pub mod submit;
pub mod ui;
