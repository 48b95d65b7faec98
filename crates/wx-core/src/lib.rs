//! wx-core: stable foundation for wxparams.
//!
//! Contains:
//! - field (array-like inputs + broadcasting shared by every formula)
//! - units (uom SI types, constructors, meteorological constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod field;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WxError, WxResult};
pub use field::{ArrayLike, Field, broadcast_shape, into_scalar, map_field, zip_map};
pub use numeric::*;
pub use units::*;
