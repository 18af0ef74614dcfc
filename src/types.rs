//! Core value types shared by the codec, decoder and analysis layers.
//!
//! This module contains the small building blocks used across the crate:
//! - [`Axes`]: a value per sensor axis (X/Y/Z)
//! - [`OffDiagonal`]: the six off-diagonal terms of a 3x3 misalignment matrix
//! - [`Representation`]: the two physical encodings of a log

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stabilization threshold: records whose counter is below this value belong
/// to the sensor warm-up and are skipped by the session decoder.
pub const STABILIZATION_THRESHOLD: u16 = 60;

/// Counter anchor: the epoch at which attitude is considered settled.
pub const COUNTER_ANCHOR: u16 = 600;

/// One value per sensor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Axes<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Axes<T> {
    /// Create from the three axis values
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Apply a function to every axis
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Axes<U> {
        Axes {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Values in X, Y, Z order
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Copy> Axes<T> {
    /// Same value on every axis
    pub const fn splat(value: T) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }
}

/// Off-diagonal terms of a 3x3 matrix, stored row-major (12, 13, 21, 23, 31, 32)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OffDiagonal {
    pub m12: f32,
    pub m13: f32,
    pub m21: f32,
    pub m23: f32,
    pub m31: f32,
    pub m32: f32,
}

impl OffDiagonal {
    /// Terms in layout order
    pub fn to_array(self) -> [f32; 6] {
        [self.m12, self.m13, self.m21, self.m23, self.m31, self.m32]
    }

    /// Build from terms in layout order
    pub fn from_array(terms: [f32; 6]) -> Self {
        let [m12, m13, m21, m23, m31, m32] = terms;
        Self {
            m12,
            m13,
            m21,
            m23,
            m31,
            m32,
        }
    }
}

/// Physical encoding of a log source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Raw little-endian records (`.dat`)
    #[default]
    Binary,
    /// Tab-delimited text mirror (`.txt`)
    Text,
}

impl Representation {
    /// File extension (without the dot) used for this representation
    pub fn extension(&self) -> &'static str {
        match self {
            Representation::Binary => "dat",
            Representation::Text => "txt",
        }
    }

    /// Short tag shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            Representation::Binary => "DAT",
            Representation::Text => "TXT",
        }
    }

    /// The other representation
    pub fn toggled(&self) -> Self {
        match self {
            Representation::Binary => Representation::Text,
            Representation::Text => Representation::Binary,
        }
    }

    /// Parse from a file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("dat") {
            Some(Representation::Binary)
        } else if ext.eq_ignore_ascii_case("txt") {
            Some(Representation::Text)
        } else {
            None
        }
    }

    /// Representation implied by a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether `path` carries this representation's extension
    pub fn matches_path(&self, path: &Path) -> bool {
        Self::from_path(path) == Some(*self)
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dat" | "binary" => Ok(Representation::Binary),
            "txt" | "text" => Ok(Representation::Text),
            other => Err(format!("unknown representation '{}'", other)),
        }
    }
}
