//! Atmospheric thermodynamics and instability indices.
//!
//! Temperatures are in °C and pressures in hPa unless stated otherwise.
//! [`lcl_temperature`] is the exception: it takes and returns Kelvin.

use crate::formula::Formula;
use wx_core::{ArrayLike, Field, WxResult, zip_map};

pub mod scalar {
    use crate::formula::Formula;
    use crate::{humidity, hydrostatic};
    use wx_core::Real;
    use wx_core::constants::{DRY_LAPSE_K_PER_M, R_DIV_CP, ZERO_CELSIUS_K};

    /// Convergence threshold on the equivalent potential temperature residual [K].
    pub const SSI_TOLERANCE_K: Real = 0.001;
    /// Bisection iteration cap for the moist-adiabatic lift.
    pub const SSI_MAX_ITERATIONS: usize = 20;
    const SSI_FIRST_GUESS_C: Real = -20.0;
    const SSI_FIRST_STEP_K: Real = 120.0;

    /// Potential temperature [K] from temperature [°C] and pressure [hPa].
    pub fn potential_temperature(t: Real, p: Real) -> Real {
        (t + ZERO_CELSIUS_K) * (1000.0 / p).powf(R_DIV_CP)
    }

    /// Temperature at the lifted condensation level [K].
    ///
    /// Both inputs are in Kelvin.
    pub fn lcl_temperature(t_k: Real, td_k: Real) -> Real {
        1.0 / (1.0 / (td_k - 56.0) + (t_k / td_k).ln() / 800.0) + 56.0
    }

    /// Equivalent potential temperature [K] (Bolton 1980 form, as used by JMA).
    pub fn equivalent_potential_temperature(t: Real, td: Real, p: Real, formula: Formula) -> Real {
        let e = formula.saturation_vapor_pressure(td);
        let m = humidity::scalar::mixing_ratio(td, p, formula);

        let t_k = t + ZERO_CELSIUS_K;
        let t_lcl = lcl_temperature(t_k, td + ZERO_CELSIUS_K);

        t_k * (1000.0 / (p - e)).powf(R_DIV_CP)
            * (t_k / t_lcl).powf(0.28 * m)
            * ((3036.0 / t_lcl - 1.78) * m * (1.0 + 0.448 * m)).exp()
    }

    /// Temperature [°C] of a parcel lifted from `p0` to `p1` across a layer of
    /// the given thickness [m].
    ///
    /// The parcel cools dry-adiabatically until it reaches its LCL temperature.
    /// Past that point the temperature at `p1` is found by bisection on
    /// conserved equivalent potential temperature.
    pub fn lifted_parcel_temperature(
        p0: Real,
        p1: Real,
        t0: Real,
        td0: Real,
        thickness: Real,
        formula: Formula,
    ) -> Real {
        if !(p0 > 0.0 && p1 > 0.0) {
            return Real::NAN;
        }

        let t_dry = t0 - thickness * DRY_LAPSE_K_PER_M;
        let t_lcl = lcl_temperature(t0 + ZERO_CELSIUS_K, td0 + ZERO_CELSIUS_K) - ZERO_CELSIUS_K;
        if t_dry > t_lcl {
            return t_dry;
        }

        let ept = equivalent_potential_temperature(t0, td0, p0, formula);
        let mut t_lift = SSI_FIRST_GUESS_C;
        let mut step = SSI_FIRST_STEP_K;
        for _ in 0..SSI_MAX_ITERATIONS {
            step /= 2.0;
            let diff = ept - equivalent_potential_temperature(t_lift, t_lift, p1, formula);
            if diff.is_nan() {
                return Real::NAN;
            }
            if diff.abs() < SSI_TOLERANCE_K {
                return t_lift;
            }
            if diff > 0.0 {
                t_lift += step;
            } else {
                t_lift -= step;
            }
        }

        tracing::trace!(p0, p1, t0, td0, t_lift, "SSI lift hit iteration cap");
        t_lift
    }

    /// Showalter stability index from base level (`p0`, `t0`, `td0`) to
    /// destination level (`p1`, `t1`).
    pub fn showalter_index(
        p0: Real,
        p1: Real,
        t0: Real,
        t1: Real,
        td0: Real,
        formula: Formula,
    ) -> Real {
        let thickness = hydrostatic::scalar::layer_thickness(p0, p1, t0, t1);
        showalter_index_with_thickness(p0, p1, t0, t1, td0, thickness, formula)
    }

    /// Showalter stability index with a known layer thickness [m].
    pub fn showalter_index_with_thickness(
        p0: Real,
        p1: Real,
        t0: Real,
        t1: Real,
        td0: Real,
        thickness: Real,
        formula: Formula,
    ) -> Real {
        t1 - lifted_parcel_temperature(p0, p1, t0, td0, thickness, formula)
    }

    #[inline]
    pub fn k_index(t850: Real, td850: Real, t700: Real, td700: Real, t500: Real) -> Real {
        (t850 - t500) + td850 - (t700 - td700)
    }
}

/// Potential temperature [K] from temperature [°C] and pressure [hPa].
pub fn potential_temperature(t: impl ArrayLike, p: impl ArrayLike) -> WxResult<Field> {
    zip_map([t.to_field(), p.to_field()], |[t, p]| {
        scalar::potential_temperature(t, p)
    })
}

/// LCL temperature [K] from temperature and dew point, both in **Kelvin**.
pub fn lcl_temperature(t_k: impl ArrayLike, td_k: impl ArrayLike) -> WxResult<Field> {
    zip_map([t_k.to_field(), td_k.to_field()], |[t, td]| {
        scalar::lcl_temperature(t, td)
    })
}

/// Equivalent potential temperature [K] from temperature, dew point [°C] and pressure [hPa].
pub fn equivalent_potential_temperature(
    t: impl ArrayLike,
    td: impl ArrayLike,
    p: impl ArrayLike,
    formula: Formula,
) -> WxResult<Field> {
    zip_map([t.to_field(), td.to_field(), p.to_field()], |[t, td, p]| {
        scalar::equivalent_potential_temperature(t, td, p, formula)
    })
}

/// Showalter stability index (SSI).
///
/// A parcel at base level (`p0`, `t0`, `td0`), typically 850 hPa, is lifted to
/// destination level `p1`, typically 500 hPa, where the environment has
/// temperature `t1`. Returns `t1` minus the parcel temperature; negative values
/// indicate instability.
pub fn showalter_index(
    p0: impl ArrayLike,
    p1: impl ArrayLike,
    t0: impl ArrayLike,
    t1: impl ArrayLike,
    td0: impl ArrayLike,
    formula: Formula,
) -> WxResult<Field> {
    zip_map(
        [p0.to_field(), p1.to_field(), t0.to_field(), t1.to_field(), td0.to_field()],
        |[p0, p1, t0, t1, td0]| scalar::showalter_index(p0, p1, t0, t1, td0, formula),
    )
}

/// Showalter stability index using a known layer thickness [m] instead of the
/// hypsometric estimate, e.g. the difference of geopotential heights `h1 - h0`.
pub fn showalter_index_with_thickness(
    p0: impl ArrayLike,
    p1: impl ArrayLike,
    t0: impl ArrayLike,
    t1: impl ArrayLike,
    td0: impl ArrayLike,
    thickness: impl ArrayLike,
    formula: Formula,
) -> WxResult<Field> {
    zip_map(
        [
            p0.to_field(),
            p1.to_field(),
            t0.to_field(),
            t1.to_field(),
            td0.to_field(),
            thickness.to_field(),
        ],
        |[p0, p1, t0, t1, td0, dz]| {
            scalar::showalter_index_with_thickness(p0, p1, t0, t1, td0, dz, formula)
        },
    )
}

/// K-Index from 850, 700 and 500 hPa temperatures and dew points [°C].
pub fn k_index(
    t850: impl ArrayLike,
    td850: impl ArrayLike,
    t700: impl ArrayLike,
    td700: impl ArrayLike,
    t500: impl ArrayLike,
) -> WxResult<Field> {
    zip_map(
        [
            t850.to_field(),
            td850.to_field(),
            t700.to_field(),
            td700.to_field(),
            t500.to_field(),
        ],
        |[t850, td850, t700, td700, t500]| scalar::k_index(t850, td850, t700, td700, t500),
    )
}
