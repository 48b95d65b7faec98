// wx-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Length as UomLength, Pressure as UomPressure,
    Ratio as UomRatio, ThermodynamicTemperature as UomThermodynamicTemperature,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn hpa(v: f64) -> Pressure {
    use uom::si::pressure::hectopascal;
    Pressure::new::<hectopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn deg_c(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn percent(v: f64) -> Ratio {
    use uom::si::ratio::percent;
    Ratio::new::<percent>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Constants shared by the formula library.
///
/// Values follow the conventions of the operational (JMA-aligned) formulas
/// rather than the latest CODATA figures, so results stay reproducible.
pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Offset between Celsius and Kelvin.
    pub const ZERO_CELSIUS_K: f64 = 273.15;

    /// Gas constant of dry air [J/(kg K)].
    pub const RD: f64 = 287.04;

    /// Ratio of gas constants Rd/Rv.
    pub const EPSILON: f64 = 0.622;

    /// Poisson exponent R/cp.
    pub const R_DIV_CP: f64 = 0.2857;

    /// Dry-adiabatic lapse rate [K/m].
    pub const DRY_LAPSE_K_PER_M: f64 = 0.00976;

    /// Standard-atmosphere lapse rate [K/m].
    pub const STD_LAPSE_K_PER_M: f64 = 0.0065;

    /// Barometric exponent g/(Rd * standard lapse rate).
    pub const BAROMETRIC_EXPONENT: f64 = 5.257;

    /// Water vapor density per unit vapor pressure and temperature, 1/Rv [g K/(m^3 Pa)].
    pub const VAPOR_DENSITY_COEFF: f64 = 2.16674;

    /// One knot in m/s.
    pub const KNOT_MPS: f64 = 0.51444;

    /// One foot in meters.
    pub const FOOT_M: f64 = 0.3048;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }
}
