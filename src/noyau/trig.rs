// src/noyau/trig.rs
//
// Mode d’angle (DEG / RAD) + conversions.
// Le facteur de conversion est exactement π/180.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::erreur::Error;

const RAD_PAR_DEG: f64 = PI / 180.0;
const DEG_PAR_RAD: f64 = 180.0 / PI;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Angle exprimé dans ce mode -> radians.
    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Degrees => x * RAD_PAR_DEG,
            AngleMode::Radians => x,
        }
    }

    /// Radians -> angle exprimé dans ce mode.
    pub fn depuis_radians(self, r: f64) -> f64 {
        match self {
            AngleMode::Degrees => r * DEG_PAR_RAD,
            AngleMode::Radians => r,
        }
    }
}

impl FromStr for AngleMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEG" => Ok(AngleMode::Degrees),
            "RAD" => Ok(AngleMode::Radians),
            _ => Err(Error::UnknownAngleMode(s.to_string())),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Degrees => write!(f, "DEG"),
            AngleMode::Radians => write!(f, "RAD"),
        }
    }
}
