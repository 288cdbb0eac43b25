//! Form rendering module
//!
//! - `field_renderer`: one field of any kind
//! - `step_form`: the current step's fields and its buttons

mod field_renderer;
mod step_form;

pub use step_form::{draw_buttons, draw_step_fields};
