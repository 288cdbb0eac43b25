//! The aggregate record submitted to the backend

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::{FieldName, FieldValue};

/// Answer to a yes/no qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl AsRef<str> for YesNo {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(format!("expected \"Yes\" or \"No\", got \"{other}\"")),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything collected across the three steps.
///
/// Serialises to the flat camelCase object the submission endpoint expects;
/// unset choices go over the wire as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormRecord {
    // Contact
    pub first_name: String,
    pub last_name: String,
    pub work_email: String,
    pub phone_number: String,
    pub company_name: String,
    pub job_title: String,
    pub consent: bool,
    // Current software
    pub dme_software: BTreeSet<String>,
    pub pain_points: String,
    pub csr_count: u32,
    pub biller_count: u32,
    pub dispatcher_count: u32,
    pub warehouse_count: u32,
    pub equipment_loss_value: u32,
    // Business info
    #[serde(with = "blank_choice")]
    pub rent_equipment: Option<YesNo>,
    #[serde(with = "blank_choice")]
    pub bill_facilities: Option<YesNo>,
    #[serde(with = "blank_choice")]
    pub bill_insurance: Option<YesNo>,
    #[serde(with = "blank_choice")]
    pub techs_drivers: Option<String>,
    #[serde(with = "blank_choice")]
    pub patient_census: Option<String>,
    pub additional_comments: String,
}

impl FormRecord {
    /// Current value of a field, in the shape widgets emit
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldName::LastName => FieldValue::Text(self.last_name.clone()),
            FieldName::WorkEmail => FieldValue::Text(self.work_email.clone()),
            FieldName::PhoneNumber => FieldValue::Text(self.phone_number.clone()),
            FieldName::CompanyName => FieldValue::Text(self.company_name.clone()),
            FieldName::JobTitle => FieldValue::Text(self.job_title.clone()),
            FieldName::Consent => FieldValue::Flag(self.consent),
            FieldName::DmeSoftware => FieldValue::Selection(self.dme_software.clone()),
            FieldName::CsrCount => FieldValue::Number(i64::from(self.csr_count)),
            FieldName::BillerCount => FieldValue::Number(i64::from(self.biller_count)),
            FieldName::DispatcherCount => FieldValue::Number(i64::from(self.dispatcher_count)),
            FieldName::WarehouseCount => FieldValue::Number(i64::from(self.warehouse_count)),
            FieldName::EquipmentLossValue => {
                FieldValue::Number(i64::from(self.equipment_loss_value))
            }
            FieldName::PainPoints => FieldValue::Text(self.pain_points.clone()),
            FieldName::RentEquipment => yes_no_value(self.rent_equipment),
            FieldName::BillFacilities => yes_no_value(self.bill_facilities),
            FieldName::BillInsurance => yes_no_value(self.bill_insurance),
            FieldName::TechsDrivers => FieldValue::Choice(self.techs_drivers.clone()),
            FieldName::PatientCensus => FieldValue::Choice(self.patient_census.clone()),
            FieldName::AdditionalComments => FieldValue::Text(self.additional_comments.clone()),
        }
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::WorkEmail => Some(&mut self.work_email),
            FieldName::PhoneNumber => Some(&mut self.phone_number),
            FieldName::CompanyName => Some(&mut self.company_name),
            FieldName::JobTitle => Some(&mut self.job_title),
            FieldName::PainPoints => Some(&mut self.pain_points),
            FieldName::AdditionalComments => Some(&mut self.additional_comments),
            _ => None,
        }
    }

    pub(crate) fn number_mut(&mut self, field: FieldName) -> Option<&mut u32> {
        match field {
            FieldName::CsrCount => Some(&mut self.csr_count),
            FieldName::BillerCount => Some(&mut self.biller_count),
            FieldName::DispatcherCount => Some(&mut self.dispatcher_count),
            FieldName::WarehouseCount => Some(&mut self.warehouse_count),
            FieldName::EquipmentLossValue => Some(&mut self.equipment_loss_value),
            _ => None,
        }
    }

    pub(crate) fn yes_no_mut(&mut self, field: FieldName) -> Option<&mut Option<YesNo>> {
        match field {
            FieldName::RentEquipment => Some(&mut self.rent_equipment),
            FieldName::BillFacilities => Some(&mut self.bill_facilities),
            FieldName::BillInsurance => Some(&mut self.bill_insurance),
            _ => None,
        }
    }

    pub(crate) fn bucket_mut(&mut self, field: FieldName) -> Option<&mut Option<String>> {
        match field {
            FieldName::TechsDrivers => Some(&mut self.techs_drivers),
            FieldName::PatientCensus => Some(&mut self.patient_census),
            _ => None,
        }
    }
}

fn yes_no_value(value: Option<YesNo>) -> FieldValue {
    FieldValue::Choice(value.map(|v| v.as_str().to_string()))
}

/// `Option<T>` as a plain string where `None` is `""`
mod blank_choice {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<str>,
    {
        serializer.serialize_str(value.as_ref().map(AsRef::as_ref).unwrap_or(""))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_record_payload_shape() {
        let payload = serde_json::to_value(FormRecord::default()).unwrap();
        assert_eq!(
            payload,
            json!({
                "phoneNumber": "",
                "companyName": "",
                "jobTitle": "",
                "firstName": "",
                "lastName": "",
                "workEmail": "",
                "consent": false,
                "dmeSoftware": [],
                "painPoints": "",
                "csrCount": 0,
                "billerCount": 0,
                "dispatcherCount": 0,
                "warehouseCount": 0,
                "equipmentLossValue": 0,
                "rentEquipment": "",
                "billFacilities": "",
                "billInsurance": "",
                "techsDrivers": "",
                "patientCensus": "",
                "additionalComments": ""
            })
        );
    }

    #[test]
    fn test_choices_serialize_as_labels() {
        let record = FormRecord {
            rent_equipment: Some(YesNo::Yes),
            bill_insurance: Some(YesNo::No),
            patient_census: Some("501-1000".to_string()),
            ..Default::default()
        };
        let payload = serde_json::to_value(&record).unwrap();
        assert_eq!(payload["rentEquipment"], "Yes");
        assert_eq!(payload["billFacilities"], "");
        assert_eq!(payload["billInsurance"], "No");
        assert_eq!(payload["patientCensus"], "501-1000");
    }

    #[test]
    fn test_deserialize_partial_record() {
        let record: FormRecord =
            serde_json::from_str(r#"{"firstName": "Ada", "rentEquipment": "No"}"#).unwrap();
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.rent_equipment, Some(YesNo::No));
        assert_eq!(record.bill_facilities, None);
    }

    #[test]
    fn test_deserialize_rejects_bad_yes_no() {
        let result = serde_json::from_str::<FormRecord>(r#"{"billFacilities": "Maybe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_reflects_fields() {
        let record = FormRecord {
            consent: true,
            csr_count: 12,
            rent_equipment: Some(YesNo::No),
            ..Default::default()
        };
        assert_eq!(record.get(FieldName::Consent), FieldValue::Flag(true));
        assert_eq!(record.get(FieldName::CsrCount), FieldValue::Number(12));
        assert_eq!(record.get(FieldName::RentEquipment), FieldValue::choice("No"));
        assert_eq!(record.get(FieldName::TechsDrivers), FieldValue::Choice(None));
    }
}
