/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::earth::FEET_PER_NM;

const FEET_PER_METER: f64 = 3.28084;
const NM_PER_MILE: f64 = 5280.0 / FEET_PER_NM;
const NM_PER_KM: f64 = 1.0 / 1.852;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Nm,
    Mi,
    Km,
}

impl DistanceUnit {
    pub fn to_nm(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Nm => value,
            DistanceUnit::Mi => value * NM_PER_MILE,
            DistanceUnit::Km => value * NM_PER_KM,
        }
    }

    pub fn from_nm(&self, nm: f64) -> f64 {
        match self {
            DistanceUnit::Nm => nm,
            DistanceUnit::Mi => nm / NM_PER_MILE,
            DistanceUnit::Km => nm / NM_PER_KM,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            DistanceUnit::Nm => "Nm",
            DistanceUnit::Mi => "Mi",
            DistanceUnit::Km => "Km",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nm" => Ok(DistanceUnit::Nm),
            "Mi" => Ok(DistanceUnit::Mi),
            "Km" => Ok(DistanceUnit::Km),
            _ => Err(format!("Unknown distance unit {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeUnit {
    Feet,
    Meter,
}

impl AltitudeUnit {
    pub fn to_feet(&self, value: f64) -> f64 {
        match self {
            AltitudeUnit::Feet => value,
            AltitudeUnit::Meter => value * FEET_PER_METER,
        }
    }
}

impl FromStr for AltitudeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ft" => Ok(AltitudeUnit::Feet),
            "M" => Ok(AltitudeUnit::Meter),
            _ => Err(format!("Unknown altitude unit {}", s)),
        }
    }
}

/// The unit system the user enters and reads values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Units {
    pub distance: DistanceUnit,
    pub altitude: AltitudeUnit,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            distance: DistanceUnit::Nm,
            altitude: AltitudeUnit::Feet,
        }
    }
}
