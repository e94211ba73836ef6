use crate::error::CalcError;
use crate::form::number::parse_dimension;
use crate::geometry::{InputState, Shape, UnitSystem};
use serde::{Deserialize, Serialize};

/// Raw values as they sit in the page's form controls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormFields {
    pub units: String,
    pub shape: String,
    #[serde(default)]
    pub radius: String,
    #[serde(default)]
    pub height: String,
}

impl FormFields {
    /// A blank form with the given selector defaults.
    pub fn blank(units: UnitSystem, shape: Shape) -> Self {
        Self {
            units: units.to_string(),
            shape: shape.name().to_string(),
            radius: String::new(),
            height: String::new(),
        }
    }

    pub fn new(
        units: impl Into<String>,
        shape: impl Into<String>,
        radius: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            units: units.into(),
            shape: shape.into(),
            radius: radius.into(),
            height: height.into(),
        }
    }

    /// Parse the raw controls into a typed request.
    ///
    /// The shape is checked first so a bad selector is reported even when the
    /// numeric fields are also wrong. Height is only read for shapes that use it.
    pub fn to_input_state(&self) -> Result<InputState, CalcError> {
        let shape: Shape = self.shape.parse()?;
        let unit_system: UnitSystem = self.units.parse()?;
        let radius = parse_dimension("radius", &self.radius)?;
        let height = if shape.uses_height() {
            Some(parse_dimension("height", &self.height)?)
        } else {
            // A sphere ignores whatever was typed into the height box.
            None
        };

        Ok(InputState::new(unit_system, shape, radius, height))
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::blank(UnitSystem::default(), Shape::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cone_form() {
        let form = FormFields::new("english", "Cone", "3", "6");
        let input = form.to_input_state().unwrap();
        assert_eq!(input.shape, Shape::Cone);
        assert_eq!(input.unit_system, UnitSystem::English);
        assert_eq!(input.radius, 3.0);
        assert_eq!(input.height, Some(6.0));
    }

    #[test]
    fn test_sphere_tolerates_garbage_height() {
        let form = FormFields::new("si", "Sphere", "2", "not a number");
        let input = form.to_input_state().unwrap();
        assert_eq!(input.unit_system, UnitSystem::Metric);
        assert_eq!(input.height, None);
    }

    #[test]
    fn test_invalid_shape_reported_first() {
        let form = FormFields::new("english", "Triangle", "", "");
        assert_eq!(
            form.to_input_state(),
            Err(CalcError::InvalidShape("Triangle".to_string()))
        );
    }

    #[test]
    fn test_cylinder_requires_height() {
        let form = FormFields::new("metric", "Cylinder", "1", "");
        assert_eq!(form.to_input_state(), Err(CalcError::MissingField("height")));
    }

    #[test]
    fn test_default_form_is_blank() {
        let form = FormFields::default();
        assert_eq!(form.units, "english");
        assert_eq!(form.shape, "Sphere");
        assert!(form.radius.is_empty());
        assert!(form.height.is_empty());
    }
}
