use crate::error::CalcError;
use crate::geometry::shape::Shape;
use crate::geometry::units::{UnitLabel, UnitSystem};
use serde::{Deserialize, Serialize};

/// Decimal places used when a volume is shown to the user.
pub const VOLUME_DECIMALS: usize = 5;

/// Placeholder shown in the height-units cell when a shape has no height.
pub const NO_UNITS: &str = "-";

/// Parameters for a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct InputState {
    pub unit_system: UnitSystem,
    pub shape: Shape,
    pub radius: f64,
    #[serde(default)]
    pub height: Option<f64>,
}

impl InputState {
    pub fn new(unit_system: UnitSystem, shape: Shape, radius: f64, height: Option<f64>) -> Self {
        Self {
            unit_system,
            shape,
            radius,
            height,
        }
    }
}

/// Everything needed to render one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub shape: Shape,
    pub units: UnitLabel,
    pub radius_units: &'static str,
    pub height_units: &'static str,
    pub formula_text: String,
    pub radius: f64,
    /// Always `None` for a sphere.
    pub height: Option<f64>,
    pub volume: f64,
}

impl ResultRecord {
    pub fn formatted_volume(&self) -> String {
        format!("{:.*}", VOLUME_DECIMALS, self.volume)
    }

    pub fn formatted_height(&self) -> String {
        self.height.map(|h| h.to_string()).unwrap_or_default()
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(CalcError::NegativeValue { field, value });
    }
    Ok(value)
}

/// Compute the volume for `input` and describe it for display.
pub fn compute(input: &InputState) -> Result<ResultRecord, CalcError> {
    let radius = check_dimension("radius", input.radius)?;
    let height = if input.shape.uses_height() {
        let h = input.height.ok_or(CalcError::MissingField("height"))?;
        Some(check_dimension("height", h)?)
    } else {
        None
    };

    let units = input.unit_system.label();
    let volume = input.shape.volume(radius, height.unwrap_or(0.0));
    // Finite inputs can still overflow, e.g. r = 1e200 gives inf (or NaN once multiplied by 0).
    if !volume.is_finite() {
        tracing::warn!(shape = %input.shape, radius, ?height, "volume out of range");
        return Err(CalcError::VolumeOutOfRange { radius, height });
    }
    tracing::debug!(
        shape = %input.shape,
        units = units.symbol,
        radius,
        ?height,
        volume,
        "computed volume"
    );

    Ok(ResultRecord {
        shape: input.shape,
        units,
        radius_units: units.symbol,
        height_units: if height.is_some() { units.symbol } else { NO_UNITS },
        formula_text: input.shape.formula(input.unit_system),
        radius,
        height,
        volume,
    })
}
