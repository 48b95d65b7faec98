//! Compass-point bucketing of wind directions.
//!
//! Sectors are centred on the compass points: on the 8-point rose, N covers
//! [337.5, 22.5), NE covers [22.5, 67.5), and so on clockwise.
//!
//! A direction of exactly 0 means "no direction" (calm or variable) and maps to a
//! caller-supplied placeholder label, or code 0 in numeric form. Due north is
//! code 8 (or 16); the other sectors are numbered 1..n-1 clockwise from the one
//! after north.

use ndarray::ArrayD;
use wx_core::{ArrayLike, Real, map_field};

const POINTS_8: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const POINTS_16: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Resolution of the compass rose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassRose {
    Eight,
    Sixteen,
}

impl CompassRose {
    pub fn points(self) -> usize {
        self.labels().len()
    }

    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Eight => &POINTS_8,
            Self::Sixteen => &POINTS_16,
        }
    }

    /// Angular width of one sector [deg].
    pub fn sector_width(self) -> Real {
        360.0 / self.points() as Real
    }

    /// Sector index (0 = N, clockwise) for a direction [deg].
    ///
    /// Returns `None` for a zero or non-finite direction. Other values outside
    /// (0, 360] are wrapped onto the circle first.
    pub fn sector(self, direction: Real) -> Option<usize> {
        if direction == 0.0 || !direction.is_finite() {
            return None;
        }
        let width = self.sector_width();
        let shifted = (direction + width / 2.0).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        Some((shifted / width) as usize % self.points())
    }

    /// Compass label for a direction, `None` when there is no direction.
    pub fn label(self, direction: Real) -> Option<&'static str> {
        self.sector(direction).map(|i| self.labels()[i])
    }

    /// Numeric code: 0 for no direction, `points()` for north, otherwise the sector index.
    pub fn code(self, direction: Real) -> u8 {
        match self.sector(direction) {
            None => 0,
            Some(0) => self.points() as u8,
            Some(i) => i as u8,
        }
    }
}

/// Compass labels for each direction on the given rose.
///
/// Directions of 0 (or NaN) become `dir_zero`; pass `None` for no label.
pub fn direction_to_compass<'a>(
    direction: impl ArrayLike,
    rose: CompassRose,
    dir_zero: Option<&'a str>,
) -> ArrayD<Option<&'a str>> {
    map_field(direction, |d| match rose.label(d) {
        Some(label) => Some(label),
        None => dir_zero,
    })
}

/// Numeric compass codes for each direction on the given rose.
pub fn direction_to_compass_code(direction: impl ArrayLike, rose: CompassRose) -> ArrayD<u8> {
    map_field(direction, |d| rose.code(d))
}

/// 8-point labels ("N", "NE", ... "NW").
pub fn direction_to_compass8<'a>(
    direction: impl ArrayLike,
    dir_zero: Option<&'a str>,
) -> ArrayD<Option<&'a str>> {
    direction_to_compass(direction, CompassRose::Eight, dir_zero)
}

/// 16-point labels ("N", "NNE", ... "NNW").
pub fn direction_to_compass16<'a>(
    direction: impl ArrayLike,
    dir_zero: Option<&'a str>,
) -> ArrayD<Option<&'a str>> {
    direction_to_compass(direction, CompassRose::Sixteen, dir_zero)
}

/// 8-point codes: 0 = no direction, 8 = N, 1 = NE, ... 7 = NW.
pub fn direction_to_compass8_code(direction: impl ArrayLike) -> ArrayD<u8> {
    direction_to_compass_code(direction, CompassRose::Eight)
}

/// 16-point codes: 0 = no direction, 16 = N, 1 = NNE, ... 15 = NNW.
pub fn direction_to_compass16_code(direction: impl ArrayLike) -> ArrayD<u8> {
    direction_to_compass_code(direction, CompassRose::Sixteen)
}
