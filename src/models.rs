use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::oxygen::{DEFAULT_P_ATM, DEFAULT_P_DBAR};

/// Ambient conditions a reading was taken under.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Temperature in °C.
    pub t_c: f64,
    /// Practical salinity (PSS-78).
    pub s: f64,
    /// Hydrostatic pressure in dbar.
    #[serde(default = "default_p_dbar")]
    pub p_dbar: f64,
    /// Atmospheric pressure in mbar.
    #[serde(default = "default_p_atm")]
    pub p_atm: f64,
}

fn default_p_dbar() -> f64 {
    DEFAULT_P_DBAR
}

fn default_p_atm() -> f64 {
    DEFAULT_P_ATM
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            t_c: 20.0,
            s: 35.0,
            p_dbar: DEFAULT_P_DBAR,
            p_atm: DEFAULT_P_ATM,
        }
    }
}

impl Conditions {
    /// Surface conditions under a standard atmosphere.
    pub fn new(t_c: f64, s: f64) -> Self {
        Self {
            t_c,
            s,
            ..Default::default()
        }
    }

    pub fn with_pressure(mut self, p_dbar: f64) -> Self {
        self.p_dbar = p_dbar;
        self
    }

    pub fn with_p_atm(mut self, p_atm: f64) -> Self {
        self.p_atm = p_atm;
        self
    }
}

/// The three interconvertible representations of dissolved oxygen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Molar concentration in umol/L.
    Concentration,
    /// Partial pressure in mbar.
    PartialPressure,
    /// Saturation in percent.
    Saturation,
}

impl Quantity {
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Concentration => "umol/L",
            Quantity::PartialPressure => "mbar",
            Quantity::Saturation => "%",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Concentration => "concentration",
            Quantity::PartialPressure => "partial_pressure",
            Quantity::Saturation => "saturation",
        };
        f.write_str(name)
    }
}

impl FromStr for Quantity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "conc" | "concentration" => Ok(Quantity::Concentration),
            "p" | "po2" | "pres" | "partial_pressure" => Ok(Quantity::PartialPressure),
            "s" | "sat" | "saturation" => Ok(Quantity::Saturation),
            _ => Err(AppError::UnknownQuantity(s.to_string())),
        }
    }
}

/// A single reading together with its conditions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sample {
    pub value: f64,
    #[serde(flatten)]
    pub conditions: Conditions,
}

/// Batch of readings to convert between two quantities.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub from: Quantity,
    pub to: Quantity,
    pub samples: Vec<Sample>,
}

/// Converted values in the order of the request's samples.
#[derive(Clone, Debug, Serialize)]
pub struct ConversionOutput {
    pub from: Quantity,
    pub to: Quantity,
    pub unit: &'static str,
    pub values: Vec<f64>,
}
