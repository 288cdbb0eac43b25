//! Form domain layer
//!
//! Field identifiers, the submitted record, inline error flags and the
//! store that ties them together.

mod errors;
mod field;
mod mask;
mod record;
mod store;

pub use errors::ErrorState;
pub use field::{FieldKind, FieldName, FieldValue};
pub use mask::{mask_phone, PHONE_DIGITS};
pub use record::{FormRecord, YesNo};
pub use store::FieldStore;
