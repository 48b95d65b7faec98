//! Hydrostatic pressure/height relations.

use wx_core::{ArrayLike, Field, WxResult, zip_map};

pub mod scalar {
    use wx_core::Real;
    use wx_core::constants::{
        BAROMETRIC_EXPONENT, G0_MPS2, RD, STD_LAPSE_K_PER_M, ZERO_CELSIUS_K,
    };

    /// Mean-sea-level pressure [hPa] from station pressure [hPa], temperature [°C]
    /// and station height [m], assuming the standard lapse rate below the station.
    pub fn sea_level_pressure(p: Real, t: Real, z: Real) -> Real {
        let lapse = STD_LAPSE_K_PER_M * z;
        p * (1.0 - lapse / (t + ZERO_CELSIUS_K + lapse)).powf(-BAROMETRIC_EXPONENT)
    }

    /// Station height [m] from sea-level pressure `p0`, station pressure `p1` [hPa]
    /// and station temperature `t1` [°C].
    pub fn surface_height(p0: Real, p1: Real, t1: Real) -> Real {
        ((p0 / p1).powf(1.0 / BAROMETRIC_EXPONENT) - 1.0) * (t1 + ZERO_CELSIUS_K)
            / STD_LAPSE_K_PER_M
    }

    /// Thickness [m] of the layer between `p0` and `p1` [hPa] with boundary
    /// temperatures `t0`, `t1` [°C] (hypsometric equation, layer-mean temperature).
    pub fn layer_thickness(p0: Real, p1: Real, t0: Real, t1: Real) -> Real {
        let t_mean = (t0 + t1) / 2.0 + ZERO_CELSIUS_K;
        RD * t_mean * (p0 / p1).ln() / G0_MPS2
    }
}

/// Pressure reduced to mean sea level [hPa].
pub fn sea_level_pressure(
    p: impl ArrayLike,
    t: impl ArrayLike,
    z: impl ArrayLike,
) -> WxResult<Field> {
    zip_map([p.to_field(), t.to_field(), z.to_field()], |[p, t, z]| {
        scalar::sea_level_pressure(p, t, z)
    })
}

/// Surface height [m] from sea-level and surface pressure [hPa] and surface temperature [°C].
pub fn surface_height(
    p0: impl ArrayLike,
    p1: impl ArrayLike,
    t1: impl ArrayLike,
) -> WxResult<Field> {
    zip_map([p0.to_field(), p1.to_field(), t1.to_field()], |[p0, p1, t1]| {
        scalar::surface_height(p0, p1, t1)
    })
}

/// Hypsometric thickness [m] between two pressure levels.
pub fn layer_thickness(
    p0: impl ArrayLike,
    p1: impl ArrayLike,
    t0: impl ArrayLike,
    t1: impl ArrayLike,
) -> WxResult<Field> {
    zip_map(
        [p0.to_field(), p1.to_field(), t0.to_field(), t1.to_field()],
        |[p0, p1, t0, t1]| scalar::layer_thickness(p0, p1, t0, t1),
    )
}
