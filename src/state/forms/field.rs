//! Form field identifiers and value objects

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// Every field carried by the demo request record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    // Contact
    FirstName,
    LastName,
    WorkEmail,
    PhoneNumber,
    CompanyName,
    JobTitle,
    Consent,
    // Current software
    DmeSoftware,
    CsrCount,
    BillerCount,
    DispatcherCount,
    WarehouseCount,
    EquipmentLossValue,
    PainPoints,
    // Business info
    RentEquipment,
    BillFacilities,
    BillInsurance,
    TechsDrivers,
    PatientCensus,
    AdditionalComments,
}

impl FieldName {
    pub const ALL: [FieldName; 20] = [
        Self::FirstName,
        Self::LastName,
        Self::WorkEmail,
        Self::PhoneNumber,
        Self::CompanyName,
        Self::JobTitle,
        Self::Consent,
        Self::DmeSoftware,
        Self::CsrCount,
        Self::BillerCount,
        Self::DispatcherCount,
        Self::WarehouseCount,
        Self::EquipmentLossValue,
        Self::PainPoints,
        Self::RentEquipment,
        Self::BillFacilities,
        Self::BillInsurance,
        Self::TechsDrivers,
        Self::PatientCensus,
        Self::AdditionalComments,
    ];

    /// Wire name, as used in the submitted payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::WorkEmail => "workEmail",
            Self::PhoneNumber => "phoneNumber",
            Self::CompanyName => "companyName",
            Self::JobTitle => "jobTitle",
            Self::Consent => "consent",
            Self::DmeSoftware => "dmeSoftware",
            Self::CsrCount => "csrCount",
            Self::BillerCount => "billerCount",
            Self::DispatcherCount => "dispatcherCount",
            Self::WarehouseCount => "warehouseCount",
            Self::EquipmentLossValue => "equipmentLossValue",
            Self::PainPoints => "painPoints",
            Self::RentEquipment => "rentEquipment",
            Self::BillFacilities => "billFacilities",
            Self::BillInsurance => "billInsurance",
            Self::TechsDrivers => "techsDrivers",
            Self::PatientCensus => "patientCensus",
            Self::AdditionalComments => "additionalComments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::WorkEmail => "Valid work email",
            Self::PhoneNumber => "Direct Phone Number",
            Self::CompanyName => "Company Name",
            Self::JobTitle => "Job Title",
            Self::Consent => "I agree to allow Serious ERP to store and process my personal data according to its terms",
            Self::DmeSoftware => "What DME software are you using?",
            Self::CsrCount => "How many CSRs?",
            Self::BillerCount => "How many Billers?",
            Self::DispatcherCount => "How many Dispatchers?",
            Self::WarehouseCount => "How many Warehouses?",
            Self::EquipmentLossValue => "What is estimated lost equipment value loss per month?",
            Self::PainPoints => "What pain points are you looking for Serious ERP to address?",
            Self::RentEquipment => "Do you rent equipment?",
            Self::BillFacilities => "Do you bill facilities?",
            Self::BillInsurance => "Do you bill insurance?",
            Self::TechsDrivers => "How many techs/drivers do you have?",
            Self::PatientCensus => "What's your active patient census?",
            Self::AdditionalComments => "Anything else we should know?",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::FirstName
            | Self::LastName
            | Self::WorkEmail
            | Self::PhoneNumber
            | Self::CompanyName
            | Self::JobTitle
            | Self::PainPoints
            | Self::AdditionalComments => FieldKind::Text,
            Self::Consent => FieldKind::Flag,
            Self::DmeSoftware => FieldKind::Selection,
            Self::CsrCount
            | Self::BillerCount
            | Self::DispatcherCount
            | Self::WarehouseCount
            | Self::EquipmentLossValue => FieldKind::Slider,
            Self::RentEquipment | Self::BillFacilities | Self::BillInsurance => FieldKind::YesNo,
            Self::TechsDrivers | Self::PatientCensus => FieldKind::Bucket,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::PainPoints | Self::AdditionalComments)
    }

    /// Inline message shown while the field is flagged in the error state.
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::Consent => "Please agree to the terms to continue.",
            _ => "This field is required.",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Declared type of a field, which decides the widget and accepted values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Slider,
    Selection,
    YesNo,
    Bucket,
}

impl FieldKind {
    /// Name of the value type this kind accepts
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Flag => "boolean",
            Self::Slider => "number",
            Self::Selection => "set-of-text",
            Self::YesNo | Self::Bucket => "choice",
        }
    }
}

/// Type-safe values emitted by widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(i64),
    Selection(BTreeSet<String>),
    /// A single pick from a fixed list; `None` is the unset sentinel
    Choice(Option<String>),
}

impl FieldValue {
    /// Shorthand for a selected choice
    pub fn choice(value: impl Into<String>) -> Self {
        FieldValue::Choice(Some(value.into()))
    }

    /// Build a selection from any list of labels
    pub fn selection<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Selection(labels.into_iter().map(Into::into).collect())
    }

    pub fn accepted_by(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Text)
                | (FieldValue::Flag(_), FieldKind::Flag)
                | (FieldValue::Number(_), FieldKind::Slider)
                | (FieldValue::Selection(_), FieldKind::Selection)
                | (FieldValue::Choice(_), FieldKind::YesNo | FieldKind::Bucket)
        )
    }
}
