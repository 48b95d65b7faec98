//! Humidity and moist-air derivations built on the vapor pressure engine.
//!
//! Units: temperatures and dew points in °C, pressure in hPa, relative humidity
//! in %. Mixing ratio and specific humidity are returned in g/g (not g/kg).

use crate::formula::Formula;
use wx_core::{ArrayLike, Field, WxResult, zip_map};

/// Relative humidity floor [%]. At 0 % the dew point would be -infinity.
pub const MIN_RELATIVE_HUMIDITY: f64 = 0.1;

pub mod scalar {
    use super::MIN_RELATIVE_HUMIDITY;
    use crate::formula::Formula;
    use wx_core::Real;
    use wx_core::constants::{EPSILON, VAPOR_DENSITY_COEFF, ZERO_CELSIUS_K};

    /// Dew point [°C] from temperature [°C] and relative humidity [%].
    pub fn dew_point(t: Real, rh: Real, formula: Formula) -> Real {
        // Comparison form keeps NaN; f64::max would replace it with the floor.
        let rh = if rh < MIN_RELATIVE_HUMIDITY {
            MIN_RELATIVE_HUMIDITY
        } else {
            rh
        };
        let e = formula.saturation_vapor_pressure(t) * rh / 100.0;
        formula.temperature_at_vapor_pressure(e)
    }

    /// Relative humidity [%] from temperature and dew point [°C].
    pub fn relative_humidity(t: Real, td: Real, formula: Formula) -> Real {
        100.0 * formula.saturation_vapor_pressure(td) / formula.saturation_vapor_pressure(t)
    }

    #[inline]
    pub fn dew_point_depression(t: Real, td: Real) -> Real {
        t - td
    }

    /// Mixing ratio [g/g] from dew point [°C] and pressure [hPa].
    pub fn mixing_ratio(td: Real, p: Real, formula: Formula) -> Real {
        let e = formula.saturation_vapor_pressure(td);
        EPSILON * e / (p - e)
    }

    /// Specific humidity [g/g] from dew point [°C] and pressure [hPa].
    pub fn specific_humidity(td: Real, p: Real, formula: Formula) -> Real {
        let e = formula.saturation_vapor_pressure(td);
        EPSILON * e / (p - (1.0 - EPSILON) * e)
    }

    /// Absolute humidity (water vapor density) [g/m^3].
    pub fn absolute_humidity(t: Real, td: Real, formula: Formula) -> Real {
        let e_pa = formula.saturation_vapor_pressure(td) * 100.0;
        VAPOR_DENSITY_COEFF * e_pa / (t + ZERO_CELSIUS_K)
    }

    /// Virtual temperature [°C].
    pub fn virtual_temperature(t: Real, td: Real, p: Real, formula: Formula) -> Real {
        let q = specific_humidity(td, p, formula);
        (t + ZERO_CELSIUS_K) * (1.0 - q + q / EPSILON) - ZERO_CELSIUS_K
    }
}

/// Dew point [°C] from temperature [°C] and relative humidity [%].
///
/// Relative humidity below 0.1 % is raised to 0.1 % before inversion.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use wx_params::{Formula, humidity::dew_point};
///
/// let t = array![[0.0, 5.0], [10.0, 20.0]];
/// let rh = array![[90.0, 50.0], [70.0, 99.5]];
/// let td = dew_point(&t, &rh, Formula::Bolton).unwrap();
/// assert!((td[[1, 1]] - 19.91913689).abs() < 1e-6);
/// ```
pub fn dew_point(t: impl ArrayLike, rh: impl ArrayLike, formula: Formula) -> WxResult<Field> {
    zip_map([t.to_field(), rh.to_field()], |[t, rh]| {
        scalar::dew_point(t, rh, formula)
    })
}

/// Relative humidity [%] from temperature and dew point [°C].
pub fn relative_humidity(t: impl ArrayLike, td: impl ArrayLike, formula: Formula) -> WxResult<Field> {
    zip_map([t.to_field(), td.to_field()], |[t, td]| {
        scalar::relative_humidity(t, td, formula)
    })
}

/// Dew point depression `T - Td` [°C].
pub fn dew_point_depression(t: impl ArrayLike, td: impl ArrayLike) -> WxResult<Field> {
    zip_map([t.to_field(), td.to_field()], |[t, td]| {
        scalar::dew_point_depression(t, td)
    })
}

/// Mixing ratio [g/g] from dew point [°C] and pressure [hPa].
pub fn mixing_ratio(td: impl ArrayLike, p: impl ArrayLike, formula: Formula) -> WxResult<Field> {
    zip_map([td.to_field(), p.to_field()], |[td, p]| {
        scalar::mixing_ratio(td, p, formula)
    })
}

/// Specific humidity [g/g] from dew point [°C] and pressure [hPa].
pub fn specific_humidity(td: impl ArrayLike, p: impl ArrayLike, formula: Formula) -> WxResult<Field> {
    zip_map([td.to_field(), p.to_field()], |[td, p]| {
        scalar::specific_humidity(td, p, formula)
    })
}

/// Absolute humidity [g/m^3] from temperature and dew point [°C].
pub fn absolute_humidity(t: impl ArrayLike, td: impl ArrayLike, formula: Formula) -> WxResult<Field> {
    zip_map([t.to_field(), td.to_field()], |[t, td]| {
        scalar::absolute_humidity(t, td, formula)
    })
}

/// Virtual temperature [°C] from temperature, dew point [°C] and pressure [hPa].
pub fn virtual_temperature(
    t: impl ArrayLike,
    td: impl ArrayLike,
    p: impl ArrayLike,
    formula: Formula,
) -> WxResult<Field> {
    zip_map([t.to_field(), td.to_field(), p.to_field()], |[t, td, p]| {
        scalar::virtual_temperature(t, td, p, formula)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use wx_core::{Tolerances, all_close, into_scalar};

    #[test]
    fn dew_point_reference_values() {
        let t = array![[0.0, 5.0], [10.0, 20.0]];
        let rh = array![[90.0, 50.0], [70.0, 99.5]];
        let td = dew_point(&t, &rh, Formula::Bolton).unwrap();
        let expected = array![[-1.44330606, -4.56523582], [4.78251527, 19.91913689]];
        assert!(all_close(&td, &expected, Tolerances::absolute(1e-6)), "{td}");
    }

    #[test]
    fn saturated_air_dew_point_equals_temperature() {
        for formula in Formula::ALL {
            let td = scalar::dew_point(17.3, 100.0, formula);
            assert_abs_diff_eq!(td, 17.3, epsilon = 1e-9);
        }
    }

    #[test]
    fn relative_humidity_floor() {
        for formula in Formula::ALL {
            let at_zero = scalar::dew_point(25.0, 0.0, formula);
            let at_floor = scalar::dew_point(25.0, 0.1, formula);
            assert_eq!(at_zero, at_floor);
            assert_eq!(scalar::dew_point(25.0, -5.0, formula), at_floor);
            assert!(at_floor.is_finite());
        }
        assert!(scalar::dew_point(25.0, f64::NAN, Formula::Bolton).is_nan());
    }

    #[test]
    fn relative_humidity_inverts_dew_point() {
        let t = array![-5.0, 10.0, 30.0];
        let rh = array![35.0, 60.0, 95.0];
        for formula in Formula::ALL {
            let td = dew_point(&t, &rh, formula).unwrap();
            let back = relative_humidity(&t, &td, formula).unwrap();
            assert!(all_close(&back, &rh.clone().into_dyn(), Tolerances::absolute(1e-9)));
        }
    }

    #[test]
    fn depression_broadcasts_scalar() {
        let d = dew_point_depression(array![20.0, 25.0], 15.0).unwrap();
        assert_eq!(d, array![5.0, 10.0].into_dyn());
    }

    #[test]
    fn moisture_content_at_surface() {
        // Td = 15 C at 1000 hPa: e ~ 17.04 hPa
        let w = into_scalar(mixing_ratio(15.0, 1000.0, Formula::Bolton).unwrap()).unwrap();
        let q = into_scalar(specific_humidity(15.0, 1000.0, Formula::Bolton).unwrap()).unwrap();
        assert_abs_diff_eq!(w, 0.010782, epsilon = 1e-5);
        assert!(q < w);
        // q = w / (1 + w)
        assert_abs_diff_eq!(q, w / (1.0 + w), epsilon = 1e-12);
    }

    #[test]
    fn absolute_humidity_of_warm_air() {
        let rho = into_scalar(absolute_humidity(20.0, 20.0, Formula::Bolton).unwrap()).unwrap();
        // Saturated air at 20 C holds about 17.3 g/m^3.
        assert_abs_diff_eq!(rho, 17.27, epsilon = 0.05);
    }

    #[test]
    fn virtual_temperature_matches_vapor_pressure_form() {
        let (t, td, p) = (20.0, 15.0, 1000.0);
        let tv = scalar::virtual_temperature(t, td, p, Formula::Bolton);
        let e = Formula::Bolton.saturation_vapor_pressure(td);
        let alt = (t + 273.15) / (1.0 - (e / p) * (1.0 - 0.622)) - 273.15;
        assert_abs_diff_eq!(tv, alt, epsilon = 1e-9);
        assert!(tv > t);
    }

    #[test]
    fn zero_pressure_element_is_isolated() {
        let q = specific_humidity(10.0, array![1000.0, 0.0, 850.0], Formula::Bolton).unwrap();
        assert!(q[[0]].is_finite());
        assert!(q[[1]] < 0.0);
        assert!(q[[2]] > q[[0]]);

        let w = mixing_ratio(10.0, array![1000.0, -1.0, 850.0], Formula::Tetens).unwrap();
        assert!(w[[0]] > 0.0 && w[[2]] > w[[0]]);
    }
}
