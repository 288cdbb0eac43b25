//! Form state: fields, validation, step navigation and notifications

mod catalog;
mod forms;
mod notification;
mod validate;
mod wizard;

pub use catalog::{OptionCatalog, SliderCatalog, SliderSpec};
pub use forms::*;
pub use notification::{NotificationState, Severity};
pub use validate::{validate, StepValidation};
pub use wizard::{Advance, Step, StepController, StepStatus};
