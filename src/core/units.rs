use crate::core::errors::HydrologError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_FL_OZ: f64 = 29.5735;

/// Display units a user can enter or read amounts in. Storage is always
/// milliliters; these exist only at the presentation boundary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum VolumeUnit {
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "cups")]
    Cups,
    #[serde(rename = "oz")]
    FluidOunces,
}

impl std::fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VolumeUnit::Milliliters => "ml",
            VolumeUnit::Liters => "L",
            VolumeUnit::Cups => "cups",
            VolumeUnit::FluidOunces => "oz",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VolumeUnit {
    type Err = HydrologError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ml" => Ok(VolumeUnit::Milliliters),
            "L" => Ok(VolumeUnit::Liters),
            "cups" => Ok(VolumeUnit::Cups),
            "oz" => Ok(VolumeUnit::FluidOunces),
            other => Err(HydrologError::UnknownUnit(other.to_string())),
        }
    }
}

/// Converts a stored amount to the given display unit. Non-milliliter
/// results carry one decimal place.
pub fn to_display(amount_ml: i64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Milliliters => amount_ml as f64,
        VolumeUnit::Liters => round_one_decimal(amount_ml as f64 / 1000.0),
        VolumeUnit::Cups => round_one_decimal(amount_ml as f64 / ML_PER_CUP),
        VolumeUnit::FluidOunces => round_one_decimal(amount_ml as f64 / ML_PER_FL_OZ),
    }
}

/// Converts a display-unit amount to whole milliliters for storage.
/// Milliliters and liters truncate; cups and ounces round to nearest.
pub fn to_storage(amount: f64, unit: VolumeUnit) -> i64 {
    match unit {
        VolumeUnit::Milliliters => amount.trunc() as i64,
        VolumeUnit::Liters => (amount * 1000.0).trunc() as i64,
        VolumeUnit::Cups => (amount * ML_PER_CUP).round() as i64,
        VolumeUnit::FluidOunces => (amount * ML_PER_FL_OZ).round() as i64,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
