//! Oxygen module: constants and shared terms for dissolved-oxygen conversions.
//!
//! This module provides:
//! - Physical constants used by the SCOR WG 142 conversion recommendations
//! - Saturated water-vapour pressure over seawater
//! - The scaled temperature and the temperature / salinity correction factors
//!   of Garcia and Gordon (1992), Benson and Krause (1984) refit
//! - The hydrostatic pressure factor applied to concentration conversions
//!
//! Units conventions:
//! - Temperature `t` in °C, salinity `s` in PSS-78
//! - Hydrostatic pressure `p` in dbar, atmospheric pressure in mbar
//! - `temperature_correction` carries the mL(STP)/L -> umol/L conversion, so
//!   `temperature_correction * salinity_correction` is umol/L at air saturation
//!   under 1013.25 mbar of moist air
//!
//! # Panics
//! None of the functions panic.
//!
//! # Errors
//! The functions are unguarded: inputs outside `-273.15 < t < 298.15` produce
//! NaN or infinite values following IEEE-754 semantics instead of an error.
//! Use [`crate::conversion::calculator::convert`] for a checked entry point.
//!
//! # Examples
//! ```rust
//! use oxygen_rs::oxygen::{ph2o_sat, salinity_correction, temperature_correction};
//!
//! let vapour = ph2o_sat(10.0, 35.0);
//! assert!(vapour > 12.0 && vapour < 12.5);
//! let c_sat = temperature_correction(10.0) * salinity_correction(10.0, 35.0);
//! assert!((c_sat - 282.0).abs() < 1.0);
//! ```

/// Mole fraction of O2 in dry air (Glueckauf 1951).
pub const XO2: f64 = 0.20946;
/// Molar volume of O2 in m3 mol-1 Pa dbar-1 (Enns et al. 1965).
pub const VM: f64 = 0.317;
/// Universal gas constant in J mol-1 K-1.
pub const R_GAS: f64 = 8.314;
/// Standard atmosphere in mbar; the reference pressure of every saturation.
pub const STANDARD_P_ATM: f64 = 1013.25;
/// Offset between °C and K.
pub const KELVIN: f64 = 273.15;

/// Default hydrostatic pressure (surface) in dbar.
pub const DEFAULT_P_DBAR: f64 = 0.0;
/// Default atmospheric pressure in mbar.
pub const DEFAULT_P_ATM: f64 = STANDARD_P_ATM;

/// Upper temperature bound (°C) of the scaled temperature logarithm.
pub const T_SCALE_MAX: f64 = 298.15;

// Garcia and Gordon (1992), Benson and Krause (1984) refit
const TCORR_SCALE: f64 = 44.6596;
const TCORR_A: [f64; 6] = [2.00907, 3.22014, 4.05010, 4.94457, -2.56847e-1, 3.88767];
const SCORR_B: [f64; 4] = [-6.24523e-3, -7.37614e-3, -1.03410e-2, -8.17083e-3];
const SCORR_C0: f64 = -4.88682e-7;

/// Evaluate `c[0] + c[1]*x + c[2]*x^2 + ...` in Horner form.
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Saturated water-vapour pressure over seawater in mbar.
pub fn ph2o_sat(t: f64, s: f64) -> f64 {
    let tk = t + KELVIN;
    STANDARD_P_ATM
        * (24.4543 - 67.4509 * (100.0 / tk) - 4.8489 * (tk / 100.0).ln() - 0.000544 * s).exp()
}

/// Scaled temperature `ln((298.15 - t) / (273.15 + t))` used by both correction factors.
pub fn scaled_temperature(t: f64) -> f64 {
    ((T_SCALE_MAX - t) / (KELVIN + t)).ln()
}

/// Temperature part of the oxygen solubility, including the mL(STP)/L to umol/L factor.
pub fn temperature_correction(t: f64) -> f64 {
    TCORR_SCALE * polyval(&TCORR_A, scaled_temperature(t)).exp()
}

/// Salinity part of the oxygen solubility (dimensionless, 1.0 at `s = 0`).
pub fn salinity_correction(t: f64, s: f64) -> f64 {
    let sca_t = scaled_temperature(t);
    (s * polyval(&SCORR_B, sca_t) + SCORR_C0 * s * s).exp()
}

/// Oxygen solubility term `TCorr * SCorr` in umol/L.
pub fn solubility(t: f64, s: f64) -> f64 {
    temperature_correction(t) * salinity_correction(t, s)
}

/// Hydrostatic pressure factor `exp(Vm * p / (R * T))`.
///
/// Returns exactly `1.0` at `p = 0`.
pub fn pressure_factor(t: f64, p_dbar: f64) -> f64 {
    (VM * p_dbar / (R_GAS * (t + KELVIN))).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vapour_pressure_is_positive_across_the_valid_range() {
        for t in [-50.0, -2.0, 0.0, 15.0, 40.0, 150.0, 298.0] {
            for s in [0.0, 20.0, 35.0, 42.0] {
                let v = ph2o_sat(t, s);
                assert!(v > 0.0 && v.is_finite(), "ph2o_sat({t}, {s}) = {v}");
            }
        }
    }

    #[test]
    fn vapour_pressure_near_twenty_degrees_fresh_water() {
        // ~23.4 mbar for pure water at 20 °C
        let v = ph2o_sat(20.0, 0.0);
        assert!((v - 23.4).abs() < 0.3, "unexpected vapour pressure {v}");
    }

    #[test]
    fn scaled_temperature_vanishes_at_twelve_point_five() {
        assert!(scaled_temperature(12.5).abs() < 1e-15);
    }

    #[test]
    fn salinity_correction_is_one_in_fresh_water() {
        assert_eq!(salinity_correction(7.0, 0.0), 1.0);
    }

    #[test]
    fn salinity_lowers_solubility() {
        assert!(solubility(10.0, 35.0) < solubility(10.0, 0.0));
        assert!(solubility(20.0, 35.0) < solubility(10.0, 35.0));
    }

    #[test]
    fn pressure_factor_is_exactly_one_at_surface() {
        assert_eq!(pressure_factor(2.0, 0.0), 1.0);
        assert_eq!(pressure_factor(-1.5, DEFAULT_P_DBAR), 1.0);
        assert!(pressure_factor(2.0, 2000.0) > 1.0);
    }

    #[test]
    fn scaled_temperature_leaves_domain_at_upper_bound() {
        assert!(scaled_temperature(T_SCALE_MAX).is_infinite());
        assert!(scaled_temperature(300.0).is_nan());
    }

    #[test]
    fn polyval_matches_expanded_form() {
        let x: f64 = 0.3;
        let expanded = 1.0 + 2.0 * x + 3.0 * x.powi(2);
        assert!((polyval(&[1.0, 2.0, 3.0], x) - expanded).abs() < 1e-15);
    }
}
