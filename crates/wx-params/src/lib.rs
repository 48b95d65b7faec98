//! wx-params: closed-form meteorological parameters.
//!
//! Provides:
//! - Saturated vapor pressure (Bolton, Tetens, WMO) and its inverse
//! - Humidity derivations (dew point, relative humidity, mixing ratio, ...)
//! - Stability indices (potential / equivalent potential temperature, SSI, K-Index)
//! - Wind vector kinematics, compass bucketing and runway components
//! - Hydrostatic pressure reduction
//! - Unit conversions
//!
//! # Architecture
//!
//! Every formula has a scalar kernel in the `scalar` submodule of its module and an
//! array entry point that accepts any [`ArrayLike`](wx_core::ArrayLike) argument
//! (`f64`, slices, `Vec<f64>`, `ndarray` arrays and views) and broadcasts
//! element-wise through [`wx_core::zip_map`]. Functions are pure; degenerate
//! elements produce NaN/Inf locally instead of failing the whole call. The only
//! errors are incompatible input shapes and an unknown [`Formula`] name.
//!
//! Units are tracked by convention: temperatures in °C (except
//! [`stability::lcl_temperature`], which is in Kelvin), pressures in hPa,
//! relative humidity in %, directions in degrees. The [`quantities`] module
//! offers `uom`-typed wrappers for single values.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use wx_params::{Formula, humidity, stability};
//!
//! let formula: Formula = "Bolton".parse().unwrap();
//! let t = array![20.0, 25.0];
//! let rh = array![60.0, 80.0];
//!
//! let td = humidity::dew_point(&t, &rh, formula).unwrap();
//! let theta_e = stability::equivalent_potential_temperature(&t, &td, 1000.0, formula).unwrap();
//! assert!(theta_e[[1]] > theta_e[[0]]);
//! ```

pub mod compass;
pub mod conversion;
pub mod formula;
pub mod humidity;
pub mod hydrostatic;
pub mod quantities;
pub mod stability;
pub mod vapor_pressure;
pub mod wind;

// Re-exports for ergonomics
pub use compass::{
    CompassRose, direction_to_compass8, direction_to_compass8_code, direction_to_compass16,
    direction_to_compass16_code,
};
pub use formula::Formula;
pub use vapor_pressure::{inverse_vapor_pressure, vapor_pressure};
pub use wind::{cross_wind, head_wind, polar_to_vector, tail_wind, vector_to_polar};
pub use wx_core::{ArrayLike, Field, WxError, WxResult, into_scalar};
