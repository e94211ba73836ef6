pub mod calculator;
pub mod config;
pub mod error;
pub mod form;
pub mod geometry;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use calculator::{CalculatorState, VolumeCalculator};
pub use config::Config;
pub use error::CalcError;
pub use form::FormFields;
pub use geometry::{compute, InputState, ResultRecord, Shape, UnitLabel, UnitSystem};
