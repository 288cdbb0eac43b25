//! Wizard steps and the controller that moves between them

use std::fmt;

use super::forms::{FieldName, FieldStore};
use super::validate::{validate, StepValidation};
use crate::error::NavigationError;

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Contact,
    Software,
    Business,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Contact, Step::Software, Step::Business];
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(&self) -> usize {
        match self {
            Self::Contact => 0,
            Self::Software => 1,
            Self::Business => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "Contact Info",
            Self::Software => "Current Software",
            Self::Business => "Business Info",
        }
    }

    pub fn is_last(&self) -> bool {
        self.index() == Self::COUNT - 1
    }

    /// Fields shown on this step, in display order
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            Self::Contact => &[
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::WorkEmail,
                FieldName::PhoneNumber,
                FieldName::CompanyName,
                FieldName::JobTitle,
                FieldName::Consent,
            ],
            Self::Software => &[
                FieldName::DmeSoftware,
                FieldName::CsrCount,
                FieldName::BillerCount,
                FieldName::DispatcherCount,
                FieldName::WarehouseCount,
                FieldName::EquipmentLossValue,
                FieldName::PainPoints,
            ],
            Self::Business => &[
                FieldName::RentEquipment,
                FieldName::BillFacilities,
                FieldName::BillInsurance,
                FieldName::TechsDrivers,
                FieldName::PatientCensus,
                FieldName::AdditionalComments,
            ],
        }
    }

    /// Fields whose error flags a failed advance on this step may write.
    ///
    /// The software step has none: its failures are not reported per field.
    pub fn flagged_fields(&self) -> &'static [FieldName] {
        match self {
            Self::Contact => &[FieldName::Consent],
            Self::Software => &[],
            Self::Business => &[
                FieldName::RentEquipment,
                FieldName::BillFacilities,
                FieldName::BillInsurance,
            ],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of a step relative to the current one, for the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// Result of an advance request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to this step
    Moved(Step),
    /// Current step failed validation; nothing moved
    Blocked(StepValidation),
    /// Current step is valid and already the last one
    AtLastStep,
}

/// Owns the current step and gates forward movement on validation
#[derive(Debug, Clone, Default)]
pub struct StepController {
    current: Step,
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn current_index(&self) -> usize {
        self.current.index()
    }

    pub fn total_steps(&self) -> usize {
        Step::COUNT
    }

    pub fn status_of(&self, step: Step) -> StepStatus {
        match step.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Validate the current step and move forward when it passes.
    ///
    /// On failure the step's flaggable fields are written into the store's
    /// error state (failing ones set, passing ones cleared); flags of other
    /// steps are left alone.
    pub fn advance(&mut self, store: &mut FieldStore) -> Advance {
        let validation = validate(self.current, store.record());
        if !validation.valid {
            let errors = store.errors_mut();
            for field in self.current.flagged_fields() {
                errors.set(*field, validation.failing_fields.contains(field));
            }
            tracing::debug!(
                step = %self.current,
                failing = ?validation.failing_fields,
                "advance blocked"
            );
            return Advance::Blocked(validation);
        }

        match Step::from_index(self.current.index() + 1) {
            Some(next) => {
                tracing::debug!(from = %self.current, to = %next, "advanced");
                self.current = next;
                Advance::Moved(next)
            }
            None => Advance::AtLastStep,
        }
    }

    /// Step back; always allowed, a no-op on the first step
    pub fn retreat(&mut self) -> Step {
        if let Some(index) = self.current.index().checked_sub(1) {
            if let Some(previous) = Step::from_index(index) {
                tracing::debug!(from = %self.current, to = %previous, "retreated");
                self.current = previous;
            }
        }
        self.current
    }

    /// Jump straight to any step. Intermediate steps are not validated, so
    /// the step indicator can be used to move freely in either direction.
    pub fn jump_to(&mut self, index: usize) -> Result<Step, NavigationError> {
        let step = Step::from_index(index).ok_or(NavigationError::StepOutOfRange {
            index,
            total: Step::COUNT,
        })?;
        tracing::debug!(from = %self.current, to = %step, "jumped");
        self.current = step;
        Ok(step)
    }
}
