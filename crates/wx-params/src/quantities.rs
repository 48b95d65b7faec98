//! Unit-checked single-value entry points.
//!
//! These wrap the scalar kernels with `uom` quantities so Celsius/Kelvin and
//! hPa/Pa mix-ups are caught by the type system. Numeric results are identical
//! to the unwrapped kernels.
//!
//! ```
//! use wx_core::units::{deg_c, percent};
//! use wx_params::{Formula, quantities};
//! use uom::si::thermodynamic_temperature::degree_celsius;
//!
//! let td = quantities::dew_point(deg_c(20.0), percent(99.5), Formula::Bolton);
//! assert!((td.get::<degree_celsius>() - 19.91913689).abs() < 1e-6);
//! ```

use crate::formula::Formula;
use crate::{humidity, stability, wind};
use uom::si::pressure::hectopascal;
use uom::si::ratio::percent;
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};
use uom::si::velocity::meter_per_second;
use wx_core::Real;
use wx_core::units::{Pressure, Ratio, Temperature, Velocity, deg_c, hpa, k, mps};

/// Saturated vapor pressure at `t` (or actual vapor pressure at a dew point).
pub fn saturation_vapor_pressure(t: Temperature, formula: Formula) -> Pressure {
    hpa(formula.saturation_vapor_pressure(t.get::<degree_celsius>()))
}

/// Dew point from temperature and relative humidity.
pub fn dew_point(t: Temperature, rh: Ratio, formula: Formula) -> Temperature {
    deg_c(humidity::scalar::dew_point(
        t.get::<degree_celsius>(),
        rh.get::<percent>(),
        formula,
    ))
}

/// Relative humidity from temperature and dew point.
pub fn relative_humidity(t: Temperature, td: Temperature, formula: Formula) -> Ratio {
    wx_core::units::percent(humidity::scalar::relative_humidity(
        t.get::<degree_celsius>(),
        td.get::<degree_celsius>(),
        formula,
    ))
}

pub fn potential_temperature(t: Temperature, p: Pressure) -> Temperature {
    k(stability::scalar::potential_temperature(
        t.get::<degree_celsius>(),
        p.get::<hectopascal>(),
    ))
}

/// LCL temperature; accepts temperatures in any scale.
pub fn lcl_temperature(t: Temperature, td: Temperature) -> Temperature {
    k(stability::scalar::lcl_temperature(t.get::<kelvin>(), td.get::<kelvin>()))
}

pub fn equivalent_potential_temperature(
    t: Temperature,
    td: Temperature,
    p: Pressure,
    formula: Formula,
) -> Temperature {
    k(stability::scalar::equivalent_potential_temperature(
        t.get::<degree_celsius>(),
        td.get::<degree_celsius>(),
        p.get::<hectopascal>(),
        formula,
    ))
}

/// Wind speed and direction [deg] from U/V components.
pub fn wind_speed_direction(u: Velocity, v: Velocity) -> (Velocity, Real) {
    let (speed, direction) =
        wind::scalar::speed_direction(u.get::<meter_per_second>(), v.get::<meter_per_second>());
    (mps(speed), direction)
}
