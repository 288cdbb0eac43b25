//! Per-step validation rules

use std::collections::BTreeSet;

use super::forms::{FieldName, FormRecord};
use super::wizard::Step;

/// Outcome of validating one step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepValidation {
    pub valid: bool,
    /// Fields to flag inline. May be empty even when invalid.
    pub failing_fields: BTreeSet<FieldName>,
}

/// Check the required fields of `step` against `record`. Pure.
pub fn validate(step: Step, record: &FormRecord) -> StepValidation {
    match step {
        Step::Contact => {
            let texts_filled = [
                &record.first_name,
                &record.last_name,
                &record.work_email,
                &record.phone_number,
                &record.company_name,
                &record.job_title,
            ]
            .iter()
            .all(|text| is_filled(text));

            let mut failing_fields = BTreeSet::new();
            if !record.consent {
                failing_fields.insert(FieldName::Consent);
            }
            StepValidation {
                valid: texts_filled && record.consent,
                failing_fields,
            }
        }
        Step::Software => StepValidation {
            valid: !record.dme_software.is_empty() && is_filled(&record.pain_points),
            failing_fields: BTreeSet::new(),
        },
        Step::Business => {
            let failing_fields: BTreeSet<FieldName> = [
                (FieldName::RentEquipment, record.rent_equipment.is_none()),
                (FieldName::BillFacilities, record.bill_facilities.is_none()),
                (FieldName::BillInsurance, record.bill_insurance.is_none()),
            ]
            .into_iter()
            .filter(|(_, unset)| *unset)
            .map(|(field, _)| field)
            .collect();
            StepValidation {
                valid: failing_fields.is_empty(),
                failing_fields,
            }
        }
    }
}

fn is_filled(text: &str) -> bool {
    !text.trim().is_empty()
}
