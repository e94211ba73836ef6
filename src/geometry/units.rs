use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UnitSystem {
    #[default]
    English,
    Metric,
}

/// Symbol and human label for a unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitLabel {
    pub symbol: &'static str,
    pub display_label: &'static str,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::English, UnitSystem::Metric];

    pub fn label(self) -> UnitLabel {
        match self {
            UnitSystem::English => UnitLabel {
                symbol: "ft",
                display_label: "English",
            },
            UnitSystem::Metric => UnitLabel {
                symbol: "m",
                display_label: "Metric",
            },
        }
    }

    pub fn symbol(self) -> &'static str {
        self.label().symbol
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::English => write!(f, "english"),
            UnitSystem::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = CalcError;

    // The page's radio buttons are named "english" and "si"; accept both spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "imperial" | "ft" => Ok(UnitSystem::English),
            "metric" | "si" | "m" => Ok(UnitSystem::Metric),
            _ => Err(CalcError::InvalidUnitSystem(s.to_string())),
        }
    }
}

// Config files and JSON accept the same spellings as the form.
impl TryFrom<String> for UnitSystem {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
