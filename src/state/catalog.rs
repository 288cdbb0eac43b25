//! Option catalog: the recognised option lists and slider bounds
//!
//! Validation never looks at these lists; they only constrain which values
//! the field store accepts, so a deployment can swap the catalog through
//! configuration without touching the step rules.

use serde::{Deserialize, Serialize};

use super::forms::FieldName;
use super::YesNo;

/// Bounds and increment of a slider field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderSpec {
    pub const fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }

    fn increment(&self) -> u32 {
        self.step.max(1)
    }

    /// Clamp into [min, max] and snap to the nearest step.
    pub fn clamp(&self, value: i64) -> u32 {
        let min = i64::from(self.min);
        let max = i64::from(self.max.max(self.min));
        let step = i64::from(self.increment());
        let bounded = value.clamp(min, max);
        let snapped = min + ((bounded - min + step / 2) / step) * step;
        snapped.min(max) as u32
    }

    /// Value one step above `value`, saturating at max
    pub fn step_up(&self, value: u32) -> u32 {
        self.clamp(i64::from(value) + i64::from(self.increment()))
    }

    /// Value one step below `value`, saturating at min
    pub fn step_down(&self, value: u32) -> u32 {
        self.clamp(i64::from(value) - i64::from(self.increment()))
    }
}

/// Per-slider bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderCatalog {
    pub csr_count: SliderSpec,
    pub biller_count: SliderSpec,
    pub dispatcher_count: SliderSpec,
    pub warehouse_count: SliderSpec,
    pub equipment_loss_value: SliderSpec,
}

impl Default for SliderCatalog {
    fn default() -> Self {
        Self {
            csr_count: SliderSpec::new(0, 50, 1),
            biller_count: SliderSpec::new(0, 30, 1),
            dispatcher_count: SliderSpec::new(0, 20, 1),
            warehouse_count: SliderSpec::new(0, 10, 1),
            equipment_loss_value: SliderSpec::new(0, 50_000, 500),
        }
    }
}

/// Recognised options for every list-backed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionCatalog {
    pub dme_software: Vec<String>,
    /// Ordered ranges for techs/drivers
    pub techs_drivers: Vec<String>,
    /// Ordered ranges for patient census
    pub patient_census: Vec<String>,
    pub sliders: SliderCatalog,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self {
            dme_software: to_strings(&[
                "MedFlow Pro",
                "CareTech Solutions",
                "HealthStream DME",
                "QuickMed Manager",
                "EasyScript DME",
                "ProCare Systems",
                "MediTrack Plus",
                "CarePoint DME",
                "FlexMed Solutions",
                "Other",
            ]),
            techs_drivers: to_strings(&["1-5", "6-10", "11-50", "50+"]),
            patient_census: to_strings(&["1-500", "501-1000", "1001-2000", "2000+"]),
            sliders: SliderCatalog::default(),
        }
    }
}

impl OptionCatalog {
    /// Slider bounds for a numeric field
    pub fn slider(&self, field: FieldName) -> Option<SliderSpec> {
        match field {
            FieldName::CsrCount => Some(self.sliders.csr_count),
            FieldName::BillerCount => Some(self.sliders.biller_count),
            FieldName::DispatcherCount => Some(self.sliders.dispatcher_count),
            FieldName::WarehouseCount => Some(self.sliders.warehouse_count),
            FieldName::EquipmentLossValue => Some(self.sliders.equipment_loss_value),
            _ => None,
        }
    }

    /// Options a list-backed field may take, in display order
    pub fn options(&self, field: FieldName) -> Vec<&str> {
        match field {
            FieldName::DmeSoftware => self.dme_software.iter().map(String::as_str).collect(),
            FieldName::TechsDrivers => self.techs_drivers.iter().map(String::as_str).collect(),
            FieldName::PatientCensus => self.patient_census.iter().map(String::as_str).collect(),
            FieldName::RentEquipment | FieldName::BillFacilities | FieldName::BillInsurance => {
                YesNo::ALL.iter().map(YesNo::as_str).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn is_option(&self, field: FieldName, value: &str) -> bool {
        self.options(field).contains(&value)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
