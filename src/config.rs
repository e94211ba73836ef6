use crate::error::CalcError;
use crate::form::FormFields;
use crate::geometry::{Shape, UnitSystem};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Selector values the form returns to on reset
    #[serde(default)]
    pub defaults: FormDefaults,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormDefaults {
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default)]
    pub shape: Shape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Only used by the command-line adapter
    #[serde(default)]
    pub format: OutputFormat,
}

impl FormDefaults {
    pub fn blank_form(&self) -> FormFields {
        FormFields::blank(self.units, self.shape)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CalcError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::Config(format!("{}: {}", path.display(), e)))?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, CalcError> {
        toml::from_str(content).map_err(|e| CalcError::Config(e.to_string()))
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
