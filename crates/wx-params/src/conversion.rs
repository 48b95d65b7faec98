//! Unit conversions for wind speed, length, and temperature.
//!
//! Each conversion is paired with its exact algebraic inverse and accepts any
//! real-valued scalar or array.

use wx_core::constants::{FOOT_M, KNOT_MPS};
use wx_core::{ArrayLike, Field, map_field};

pub mod scalar {
    use super::*;
    use wx_core::Real;

    #[inline]
    pub fn mps_to_kt(x: Real) -> Real {
        x / KNOT_MPS
    }

    #[inline]
    pub fn kt_to_mps(x: Real) -> Real {
        x * KNOT_MPS
    }

    #[inline]
    pub fn m_to_ft(x: Real) -> Real {
        x / FOOT_M
    }

    #[inline]
    pub fn ft_to_m(x: Real) -> Real {
        x * FOOT_M
    }

    #[inline]
    pub fn deg_c_to_deg_f(t: Real) -> Real {
        1.8 * t + 32.0
    }

    #[inline]
    pub fn deg_f_to_deg_c(t: Real) -> Real {
        (t - 32.0) / 1.8
    }
}

/// Wind speed: m/s -> knot.
pub fn mps_to_kt(x: impl ArrayLike) -> Field {
    map_field(x, scalar::mps_to_kt)
}

/// Wind speed: knot -> m/s.
pub fn kt_to_mps(x: impl ArrayLike) -> Field {
    map_field(x, scalar::kt_to_mps)
}

/// Length: meter -> feet.
pub fn m_to_ft(x: impl ArrayLike) -> Field {
    map_field(x, scalar::m_to_ft)
}

/// Length: feet -> meter.
pub fn ft_to_m(x: impl ArrayLike) -> Field {
    map_field(x, scalar::ft_to_m)
}

/// Temperature: °C -> °F.
pub fn deg_c_to_deg_f(t: impl ArrayLike) -> Field {
    map_field(t, scalar::deg_c_to_deg_f)
}

/// Temperature: °F -> °C.
pub fn deg_f_to_deg_c(t: impl ArrayLike) -> Field {
    map_field(t, scalar::deg_f_to_deg_c)
}
