//! Live holder of the record and its inline error flags

use std::sync::Arc;

use super::errors::ErrorState;
use super::field::{FieldKind, FieldName, FieldValue};
use super::record::{FormRecord, YesNo};
use crate::error::FieldError;
use crate::state::catalog::OptionCatalog;

/// Field values for the running form plus the derived error flags
#[derive(Debug, Clone)]
pub struct FieldStore {
    record: FormRecord,
    errors: ErrorState,
    catalog: Arc<OptionCatalog>,
}

impl FieldStore {
    pub fn new(catalog: Arc<OptionCatalog>) -> Self {
        Self::with_record(catalog, FormRecord::default())
    }

    /// Start from a prefilled record. Slider values are re-clamped so the
    /// bounds hold from the first read.
    pub fn with_record(catalog: Arc<OptionCatalog>, mut record: FormRecord) -> Self {
        for field in FieldName::ALL {
            if let (Some(spec), Some(value)) = (catalog.slider(field), record.number_mut(field)) {
                *value = spec.clamp(i64::from(*value));
            }
        }
        Self {
            record,
            errors: ErrorState::default(),
            catalog,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub(crate) fn errors_mut(&mut self) -> &mut ErrorState {
        &mut self.errors
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Full copy of the current record for submission
    pub fn snapshot(&self) -> FormRecord {
        self.record.clone()
    }

    /// Overwrite a field.
    ///
    /// Numbers are clamped into the slider bounds before storage and list
    /// values must come from the option catalog. An accepted update clears
    /// the field's error flag whatever the new value is.
    pub fn set_field(&mut self, field: FieldName, value: FieldValue) -> Result<(), FieldError> {
        let kind = field.kind();
        if !value.accepted_by(kind) {
            return Err(FieldError::TypeMismatch {
                field,
                expected: kind.expected(),
            });
        }

        match value {
            FieldValue::Text(text) => {
                if let Some(slot) = self.record.text_mut(field) {
                    *slot = text;
                }
            }
            FieldValue::Flag(flag) => self.record.consent = flag,
            FieldValue::Number(number) => {
                let spec = self.catalog.slider(field);
                if let (Some(spec), Some(slot)) = (spec, self.record.number_mut(field)) {
                    *slot = spec.clamp(number);
                }
            }
            FieldValue::Selection(labels) => {
                if let Some(unknown) = labels
                    .iter()
                    .find(|label| !self.catalog.is_option(field, label))
                {
                    return Err(FieldError::UnknownOption {
                        field,
                        value: unknown.clone(),
                    });
                }
                self.record.dme_software = labels;
            }
            FieldValue::Choice(choice) => self.set_choice(field, kind, choice)?,
        }

        tracing::debug!(field = %field, "field updated");
        self.errors.clear(field);
        Ok(())
    }

    /// Same as [`set_field`](Self::set_field) for bindings that address
    /// fields by wire name
    pub fn set_field_by_name(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        let field = name.parse::<FieldName>()?;
        self.set_field(field, value)
    }

    fn set_choice(
        &mut self,
        field: FieldName,
        kind: FieldKind,
        choice: Option<String>,
    ) -> Result<(), FieldError> {
        if let Some(value) = &choice {
            if !self.catalog.is_option(field, value) {
                return Err(FieldError::UnknownOption {
                    field,
                    value: value.clone(),
                });
            }
        }

        match kind {
            FieldKind::YesNo => {
                let parsed = match choice {
                    Some(value) => {
                        let answer = value
                            .parse::<YesNo>()
                            .map_err(|_| FieldError::UnknownOption { field, value })?;
                        Some(answer)
                    }
                    None => None,
                };
                if let Some(slot) = self.record.yes_no_mut(field) {
                    *slot = parsed;
                }
            }
            _ => {
                if let Some(slot) = self.record.bucket_mut(field) {
                    *slot = choice;
                }
            }
        }
        Ok(())
    }
}
