//! Element-wise vapor pressure and its inverse.

use crate::formula::Formula;
use wx_core::{ArrayLike, Field, map_field};

/// Saturated vapor pressure [hPa] from temperature [°C].
///
/// Pass a dew point to get the actual vapor pressure.
pub fn vapor_pressure(t: impl ArrayLike, formula: Formula) -> Field {
    map_field(t, |t| formula.saturation_vapor_pressure(t))
}

/// Temperature [°C] from saturated vapor pressure [hPa].
///
/// Pass an actual vapor pressure to get the dew point.
pub fn inverse_vapor_pressure(es: impl ArrayLike, formula: Formula) -> Field {
    map_field(es, |es| formula.temperature_at_vapor_pressure(es))
}
