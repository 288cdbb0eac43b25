//! Inline validation flags

use std::collections::BTreeMap;

use super::field::FieldName;

/// Flags for the fields that carry inline validation messages.
///
/// Only consent and the three yes/no qualifiers are tracked; every other
/// field is ignored by `set` and never reported as flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    flags: BTreeMap<FieldName, bool>,
}

impl ErrorState {
    pub const TRACKED: [FieldName; 4] = [
        FieldName::Consent,
        FieldName::RentEquipment,
        FieldName::BillFacilities,
        FieldName::BillInsurance,
    ];

    pub fn is_tracked(field: FieldName) -> bool {
        Self::TRACKED.contains(&field)
    }

    pub fn is_flagged(&self, field: FieldName) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    /// Set a tracked flag; untracked fields are ignored
    pub fn set(&mut self, field: FieldName, invalid: bool) {
        if let Some(flag) = self.flags.get_mut(&field) {
            *flag = invalid;
        }
    }

    pub fn clear(&mut self, field: FieldName) {
        self.set(field, false);
    }

    /// Fields currently flagged, in field order
    pub fn flagged(&self) -> Vec<FieldName> {
        self.flags
            .iter()
            .filter(|(_, invalid)| **invalid)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn any(&self) -> bool {
        self.flags.values().any(|invalid| *invalid)
    }
}

impl Default for ErrorState {
    fn default() -> Self {
        Self {
            flags: Self::TRACKED.iter().map(|field| (*field, false)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        let errors = ErrorState::default();
        assert!(!errors.any());
        assert!(errors.flagged().is_empty());
    }

    #[test]
    fn test_set_and_clear_tracked_field() {
        let mut errors = ErrorState::default();
        errors.set(FieldName::BillInsurance, true);
        assert!(errors.is_flagged(FieldName::BillInsurance));
        assert_eq!(errors.flagged(), vec![FieldName::BillInsurance]);
        errors.clear(FieldName::BillInsurance);
        assert!(!errors.any());
    }

    #[test]
    fn test_untracked_field_is_ignored() {
        let mut errors = ErrorState::default();
        errors.set(FieldName::FirstName, true);
        assert!(!errors.is_flagged(FieldName::FirstName));
        assert!(!errors.any());
    }

    #[test]
    fn test_tracked_membership() {
        assert!(ErrorState::is_tracked(FieldName::Consent));
        assert!(!ErrorState::is_tracked(FieldName::PainPoints));
    }
}
