use crate::adapters::teos10::potential_density;
use crate::error::AppError;
use crate::models::{Conditions, ConversionOutput, ConversionRequest, Quantity};
use crate::oxygen::*;

/// Convert molar oxygen concentration (umol/L) to oxygen partial pressure (mbar).
pub fn o2c_to_o2p(o2conc: f64, t: f64, s: f64, p_dbar: f64) -> f64 {
    let ph2o = ph2o_sat(t, s);
    o2conc * (XO2 * (STANDARD_P_ATM - ph2o)) / solubility(t, s) * pressure_factor(t, p_dbar)
}

/// Convert molar oxygen concentration (umol/L) to oxygen saturation (%).
///
/// Saturation is relative to moist air at `p_atm` (mbar).
pub fn o2c_to_o2s(o2conc: f64, t: f64, s: f64, p_dbar: f64, p_atm: f64) -> f64 {
    let ph2o = ph2o_sat(t, s);
    o2conc * 100.0 / solubility(t, s) / (p_atm - ph2o)
        * (STANDARD_P_ATM - ph2o)
        * pressure_factor(t, p_dbar)
}

/// Convert oxygen partial pressure (mbar) to molar oxygen concentration (umol/L).
pub fn o2p_to_o2c(po2: f64, t: f64, s: f64, p_dbar: f64) -> f64 {
    let ph2o = ph2o_sat(t, s);
    po2 / (XO2 * (STANDARD_P_ATM - ph2o)) * solubility(t, s) / pressure_factor(t, p_dbar)
}

/// Convert oxygen partial pressure (mbar) to oxygen saturation (%).
///
/// Neither the solubility terms nor the hydrostatic pressure factor enter
/// here; `_p_dbar` is accepted to keep the call shape of the other
/// saturation conversions.
pub fn o2p_to_o2s(po2: f64, t: f64, s: f64, _p_dbar: f64, p_atm: f64) -> f64 {
    po2 * 100.0 / (XO2 * (p_atm - ph2o_sat(t, s)))
}

/// Convert oxygen saturation (%) to molar oxygen concentration (umol/L).
pub fn o2s_to_o2c(o2sat: f64, t: f64, s: f64, p_dbar: f64, p_atm: f64) -> f64 {
    let ph2o = ph2o_sat(t, s);
    o2sat / 100.0 * solubility(t, s) * (p_atm - ph2o) / (STANDARD_P_ATM - ph2o)
        / pressure_factor(t, p_dbar)
}

/// Convert oxygen saturation (%) to oxygen partial pressure (mbar).
///
/// Inverse of [`o2p_to_o2s`]; `_p_dbar` is ignored for the same reason.
pub fn o2s_to_o2p(o2sat: f64, t: f64, s: f64, _p_dbar: f64, p_atm: f64) -> f64 {
    o2sat / 100.0 * (XO2 * (p_atm - ph2o_sat(t, s)))
}

/// Salinity compensation of an optode concentration reported for fresh water.
///
/// Optodes sense partial pressure; a concentration computed with an internal
/// salinity of 0 is mapped to the concentration at salinity `s` that has the
/// same partial pressure.
pub fn o2_fresh_to_sal(o2conc_fresh: f64, t: f64, s: f64, p_dbar: f64) -> f64 {
    o2p_to_o2c(o2c_to_o2p(o2conc_fresh, t, 0.0, p_dbar), t, s, p_dbar)
}

fn ensure_finite(what: &'static str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::Domain { what, value })
    }
}

/// Reject conditions under which the requested conversion has no real value.
fn check_domain(from: Quantity, to: Quantity, c: &Conditions) -> Result<(), AppError> {
    ensure_finite("temperature", c.t_c)?;
    ensure_finite("salinity", c.s)?;
    ensure_finite("hydrostatic pressure", c.p_dbar)?;
    ensure_finite("atmospheric pressure", c.p_atm)?;

    if c.t_c <= -KELVIN {
        return Err(AppError::Domain {
            what: "temperature at or below absolute zero",
            value: c.t_c,
        });
    }

    let uses = |q: Quantity| from == q || to == q;
    let ph2o = ph2o_sat(c.t_c, c.s);

    if uses(Quantity::Concentration) {
        if c.t_c >= T_SCALE_MAX {
            return Err(AppError::Domain {
                what: "temperature outside the solubility fit",
                value: c.t_c,
            });
        }
        if STANDARD_P_ATM <= ph2o {
            return Err(AppError::Domain {
                what: "water vapour pressure exceeds the standard atmosphere",
                value: ph2o,
            });
        }
    }
    if uses(Quantity::Saturation) && c.p_atm <= ph2o {
        return Err(AppError::Domain {
            what: "atmospheric pressure not above water vapour pressure",
            value: c.p_atm,
        });
    }
    Ok(())
}

/// Convert `value` from one oxygen quantity to another.
///
/// Unlike the raw conversion functions this surfaces numeric domain problems
/// as [`AppError::Domain`] instead of returning NaN or infinity.
pub fn convert(
    value: f64,
    from: Quantity,
    to: Quantity,
    conditions: &Conditions,
) -> Result<f64, AppError> {
    ensure_finite("input value", value)?;
    if from == to {
        return Ok(value);
    }
    check_domain(from, to, conditions)?;

    let Conditions {
        t_c: t,
        s,
        p_dbar: p,
        p_atm,
    } = *conditions;
    let out = match (from, to) {
        (Quantity::Concentration, Quantity::PartialPressure) => o2c_to_o2p(value, t, s, p),
        (Quantity::Concentration, Quantity::Saturation) => o2c_to_o2s(value, t, s, p, p_atm),
        (Quantity::PartialPressure, Quantity::Concentration) => o2p_to_o2c(value, t, s, p),
        (Quantity::PartialPressure, Quantity::Saturation) => o2p_to_o2s(value, t, s, p, p_atm),
        (Quantity::Saturation, Quantity::Concentration) => o2s_to_o2c(value, t, s, p, p_atm),
        (Quantity::Saturation, Quantity::PartialPressure) => o2s_to_o2p(value, t, s, p, p_atm),
        (Quantity::Concentration, Quantity::Concentration)
        | (Quantity::PartialPressure, Quantity::PartialPressure)
        | (Quantity::Saturation, Quantity::Saturation) => value,
    };
    ensure_finite("conversion result", out)
}

/// Elementwise [`convert`] over a series of readings.
///
/// `conditions` holds either one entry, applied to every value, or exactly
/// one entry per value.
pub fn convert_many(
    values: &[f64],
    from: Quantity,
    to: Quantity,
    conditions: &[Conditions],
) -> Result<Vec<f64>, AppError> {
    match conditions {
        [single] => values
            .iter()
            .map(|&v| convert(v, from, to, single))
            .collect(),
        _ if conditions.len() == values.len() => values
            .iter()
            .zip(conditions)
            .map(|(&v, c)| convert(v, from, to, c))
            .collect(),
        _ => Err(AppError::LengthMismatch {
            values: values.len(),
            conditions: conditions.len(),
        }),
    }
}

/// Run every sample of a [`ConversionRequest`] through [`convert`].
pub fn process_request(req: &ConversionRequest) -> Result<ConversionOutput, AppError> {
    let values = req
        .samples
        .iter()
        .map(|sample| convert(sample.value, req.from, req.to, &sample.conditions))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ConversionOutput {
        from: req.from,
        to: req.to,
        unit: req.to.unit(),
        values,
    })
}

/// Express a concentration in umol/L per unit mass (umol/kg).
///
/// Divides by the potential density (kg/L) of the sample at the surface,
/// with `conditions.s` taken as Practical Salinity.
pub fn umol_per_l_to_umol_per_kg(o2conc: f64, conditions: &Conditions) -> Result<f64, AppError> {
    let rho = potential_density(conditions.s, conditions.t_c, conditions.p_dbar)?;
    ensure_finite("concentration per kg", o2conc / (rho / 1000.0))
}

/// Inverse of [`umol_per_l_to_umol_per_kg`].
pub fn umol_per_kg_to_umol_per_l(o2conc_kg: f64, conditions: &Conditions) -> Result<f64, AppError> {
    let rho = potential_density(conditions.s, conditions.t_c, conditions.p_dbar)?;
    ensure_finite("concentration per litre", o2conc_kg * rho / 1000.0)
}
