//! Letter grades and the grade-point table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade on the standard 4.0 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 4.0 grade points
    A,
    /// 3.0 grade points
    B,
    /// 2.0 grade points
    C,
    /// 1.0 grade points
    D,
    /// 0.0 grade points
    F,
}

impl Grade {
    /// Grade-point value of this letter grade
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Whether this grade meets a minimum-grade requirement
    ///
    /// # Arguments
    /// * `min` - The minimum acceptable grade
    #[must_use]
    pub fn at_least(self, min: Self) -> bool {
        self.points() >= min.points()
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            other => Err(format!("Unknown letter grade: '{other}'")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        write!(f, "{letter}")
    }
}
