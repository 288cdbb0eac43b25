//! A running demo request form
//!
//! [`LeadForm`] owns the field store, the step controller and the
//! notification, and forwards submissions to the coordinator. Hosts drive
//! it through these methods and re-render from its accessors.

use std::sync::Arc;

use crate::error::{FieldError, NavigationError};
use crate::state::{
    Advance, FieldName, FieldStore, FieldValue, FormRecord, NotificationState, OptionCatalog, Step,
    StepController, StepStatus,
};
use crate::submit::{Outcome, SubmissionCoordinator, SubmitTransport};

pub const FORM_TITLE: &str = "Request a SeriousERP Demo";

/// One mounted form instance
pub struct LeadForm {
    store: FieldStore,
    controller: StepController,
    notification: NotificationState,
    coordinator: SubmissionCoordinator,
}

impl LeadForm {
    pub fn new(catalog: Arc<OptionCatalog>, transport: Arc<dyn SubmitTransport>) -> Self {
        Self::with_record(catalog, transport, FormRecord::default())
    }

    /// Start from prefilled values
    pub fn with_record(
        catalog: Arc<OptionCatalog>,
        transport: Arc<dyn SubmitTransport>,
        record: FormRecord,
    ) -> Self {
        Self {
            store: FieldStore::with_record(catalog, record),
            controller: StepController::new(),
            notification: NotificationState::default(),
            coordinator: SubmissionCoordinator::new(transport),
        }
    }

    pub fn record(&self) -> &FormRecord {
        self.store.record()
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    pub fn current_step(&self) -> Step {
        self.controller.current()
    }

    pub fn step_status(&self, step: Step) -> StepStatus {
        self.controller.status_of(step)
    }

    pub fn is_flagged(&self, field: FieldName) -> bool {
        self.store.errors().is_flagged(field)
    }

    pub fn set_field(&mut self, field: FieldName, value: FieldValue) -> Result<(), FieldError> {
        self.store.set_field(field, value)
    }

    /// "Next": validated forward movement
    pub fn next(&mut self) -> Advance {
        self.controller.advance(&mut self.store)
    }

    /// "Back"
    pub fn back(&mut self) -> Step {
        self.controller.retreat()
    }

    /// Step indicator navigation, unvalidated
    pub fn jump_to(&mut self, index: usize) -> Result<Step, NavigationError> {
        self.controller.jump_to(index)
    }

    /// "Request Demo" on the last step.
    ///
    /// Runs the last step's validation first; when it fails the error flags
    /// are updated and nothing is sent. Otherwise one request goes out with
    /// a snapshot of every field and its outcome replaces the notification.
    /// The current step never changes.
    pub async fn request_demo(&mut self) -> Option<Outcome> {
        if !self.controller.current().is_last() {
            return None;
        }
        if let Advance::Blocked(_) = self.controller.advance(&mut self.store) {
            return None;
        }

        let outcome = self.submit().await;
        Some(outcome)
    }

    /// Submit the current values without any step gate
    pub async fn submit(&mut self) -> Outcome {
        let snapshot = self.store.snapshot();
        let outcome = self.coordinator.submit(&snapshot).await;
        self.notification
            .show(outcome.message().to_string(), outcome.severity());
        outcome
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }
}
