//! Wind vector kinematics.
//!
//! Directions follow the meteorological convention: the bearing the wind blows
//! *from*, in degrees clockwise from north. A wind from the north is reported as
//! 360, never 0; a direction of exactly 0 is reserved for calm.
//!
//! Speeds may be in any consistent unit (m/s, kt, ...); outputs keep that unit.

use wx_core::{ArrayLike, Field, WxResult, zip_map};

pub mod scalar {
    use wx_core::Real;

    /// (speed, direction) from U/V components.
    pub fn speed_direction(u: Real, v: Real) -> (Real, Real) {
        let speed = (u * u + v * v).sqrt();
        let mut direction = u.atan2(v).to_degrees() + 180.0;
        if direction == 0.0 {
            direction = 360.0;
        }
        if speed == 0.0 {
            direction = 0.0;
        }
        (speed, direction)
    }

    /// (U, V) components from speed and direction.
    pub fn components(speed: Real, direction: Real) -> (Real, Real) {
        let (sin, cos) = direction.to_radians().sin_cos();
        (-speed * sin, -speed * cos)
    }

    /// Magnitude of the wind component across a runway.
    pub fn cross_wind(speed: Real, direction: Real, runway: Real) -> Real {
        (speed * (direction - runway).to_radians().sin()).abs()
    }

    /// Wind component along the runway heading; positive pushes from behind.
    pub fn tail_wind(speed: Real, direction: Real, runway: Real) -> Real {
        -speed * (direction - runway).to_radians().cos()
    }

    /// Wind component against the runway heading; negation of [`tail_wind`].
    pub fn head_wind(speed: Real, direction: Real, runway: Real) -> Real {
        -tail_wind(speed, direction, runway)
    }
}

/// Wind speed and direction [deg] from U and V components.
///
/// Returns `(speed, direction)`. Calm wind gives direction 0; any other wind has
/// direction in (0, 360].
pub fn vector_to_polar(u: impl ArrayLike, v: impl ArrayLike) -> WxResult<(Field, Field)> {
    let pairs = zip_map([u.to_field(), v.to_field()], |[u, v]| {
        scalar::speed_direction(u, v)
    })?;
    Ok((pairs.mapv(|p| p.0), pairs.mapv(|p| p.1)))
}

/// U and V components from wind speed and direction [deg].
///
/// Returns `(u, v)`.
pub fn polar_to_vector(speed: impl ArrayLike, direction: impl ArrayLike) -> WxResult<(Field, Field)> {
    let pairs = zip_map([speed.to_field(), direction.to_field()], |[s, d]| {
        scalar::components(s, d)
    })?;
    Ok((pairs.mapv(|p| p.0), pairs.mapv(|p| p.1)))
}

/// Cross-wind magnitude for a runway bearing `runway` [deg, 0-360].
///
/// `runway` is the magnetic/true bearing, not a two-digit designator (use 340, not 34).
pub fn cross_wind(
    speed: impl ArrayLike,
    direction: impl ArrayLike,
    runway: impl ArrayLike,
) -> WxResult<Field> {
    zip_map(
        [speed.to_field(), direction.to_field(), runway.to_field()],
        |[s, d, r]| scalar::cross_wind(s, d, r),
    )
}

/// Tail-wind component for a runway bearing `runway` [deg, 0-360].
pub fn tail_wind(
    speed: impl ArrayLike,
    direction: impl ArrayLike,
    runway: impl ArrayLike,
) -> WxResult<Field> {
    zip_map(
        [speed.to_field(), direction.to_field(), runway.to_field()],
        |[s, d, r]| scalar::tail_wind(s, d, r),
    )
}

/// Head-wind component for a runway bearing `runway` [deg, 0-360].
pub fn head_wind(
    speed: impl ArrayLike,
    direction: impl ArrayLike,
    runway: impl ArrayLike,
) -> WxResult<Field> {
    zip_map(
        [speed.to_field(), direction.to_field(), runway.to_field()],
        |[s, d, r]| scalar::head_wind(s, d, r),
    )
}
