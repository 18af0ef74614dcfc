//! Degree / minute / second decomposition of angles

use serde::{Deserialize, Serialize};
use std::fmt;

/// An angle in degrees, minutes and seconds, plus the distance from the
/// angle to the nearest whole degree in the same units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AngleDecomposition {
    pub degree: i32,
    pub minute: u32,
    pub second: u32,
    /// Sign of the source angle; needed when `degree` is 0
    pub negative: bool,
    pub degree_error: u32,
    pub minute_error: u32,
    pub second_error: u32,
}

/// Split a value into whole degrees, minutes and rounded seconds.
///
/// A second that rounds to 60 carries into the minute, and a minute of 60
/// carries into the degree, away from zero.
fn split(value: f64) -> (i32, u32, u32) {
    let mut degree = value.trunc() as i32;
    let minutes = value.fract().abs() * 60.0;
    let mut minute = minutes.trunc() as u32;
    let mut second = (minutes.fract() * 60.0).round() as u32;

    if second >= 60 {
        second = 0;
        minute += 1;
    }
    if minute >= 60 {
        minute = 0;
        degree = if value < 0.0 {
            degree.saturating_sub(1)
        } else {
            degree.saturating_add(1)
        };
    }
    (degree, minute, second)
}

impl AngleDecomposition {
    /// Decompose an angle given in degrees
    pub fn from_degrees(value: f32) -> Self {
        let value = f64::from(value);
        let (degree, minute, second) = split(value);

        let residual = (value.round() - value).abs();
        let (degree_error, minute_error, second_error) = split(residual);

        Self {
            degree,
            minute,
            second,
            negative: value < 0.0,
            degree_error: degree_error.unsigned_abs(),
            minute_error,
            second_error,
        }
    }

    /// Error part expressed in arc-seconds
    pub fn error_arcseconds(&self) -> u32 {
        self.minute_error * 60 + self.second_error
    }

    /// Whole degrees as text, keeping the sign of angles between -1° and 0°
    pub fn degree_label(&self) -> String {
        if self.negative && self.degree == 0 {
            "-0".to_string()
        } else {
            self.degree.to_string()
        }
    }

    /// Error part as `D°MM'SS"`
    pub fn error_label(&self) -> String {
        format!(
            "{}°{:02}'{:02}\"",
            self.degree_error, self.minute_error, self.second_error
        )
    }
}

impl fmt::Display for AngleDecomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'{}\"", self.degree_label(), self.minute, self.second)
    }
}
