use std::fmt;
use std::str::FromStr;

use crate::error::AlcError;
use crate::scorer::constants::{ML_PER_ML, ML_PER_OUNCE, ML_PER_SHOT};

/// Volume unit a drink size is entered in.
///
/// Milliliters are the base unit; every other unit converts to it by a fixed factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    #[default]
    Milliliter,
    Ounce,
    Shot,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 3] = [VolumeUnit::Milliliter, VolumeUnit::Ounce, VolumeUnit::Shot];

    /// Milliliters per one of this unit.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            VolumeUnit::Milliliter => ML_PER_ML,
            VolumeUnit::Ounce => ML_PER_OUNCE,
            VolumeUnit::Shot => ML_PER_SHOT,
        }
    }

    /// Short label shown in the unit picker.
    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::Ounce => "oz",
            VolumeUnit::Shot => "shot",
        }
    }

    /// Every spelling accepted by `from_str`, lowercase.
    pub fn known_names() -> &'static [&'static str] {
        &[
            "ml",
            "milliliter",
            "milliliters",
            "oz",
            "ounce",
            "ounces",
            "shot",
            "shots",
        ]
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VolumeUnit {
    type Err = AlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" => Ok(VolumeUnit::Milliliter),
            "oz" | "ounce" | "ounces" => Ok(VolumeUnit::Ounce),
            "shot" | "shots" => Ok(VolumeUnit::Shot),
            _ => Err(AlcError::UnknownUnit(s.to_string())),
        }
    }
}
