pub mod html;
pub mod text;

pub use html::*;
pub use text::*;

use crate::geometry::ResultRecord;
use serde::{Deserialize, Serialize};

/// Output formats for a rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

pub fn format_json(record: &ResultRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

pub fn render(record: &ResultRecord, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(record)),
        OutputFormat::Html => Ok(render_html(record)),
        OutputFormat::Json => format_json(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute, InputState, Shape, UnitSystem};
    use serde_json::Value;

    #[test]
    fn test_format_json_sphere() {
        let record = compute(&InputState::new(UnitSystem::Metric, Shape::Sphere, 2.0, Some(4.0))).unwrap();
        let json: Value = serde_json::from_str(&format_json(&record).unwrap()).unwrap();

        assert_eq!(json["shape"], "Sphere");
        assert_eq!(json["units"]["symbol"], "m");
        assert_eq!(json["units"]["display_label"], "Metric");
        assert_eq!(json["radius_units"], "m");
        assert_eq!(json["height_units"], "-");
        assert!(json["height"].is_null());
        assert_eq!(json["formula_text"], "3/4 * Π * r(m)^3");
        let volume = json["volume"].as_f64().unwrap();
        assert!((volume - record.volume).abs() < 1e-9);
    }

    #[test]
    fn test_format_json_cone() {
        let record = compute(&InputState::new(UnitSystem::English, Shape::Cone, 3.0, Some(6.0))).unwrap();
        let json: Value = serde_json::from_str(&format_json(&record).unwrap()).unwrap();

        assert_eq!(json["height"].as_f64(), Some(6.0));
        assert_eq!(json["height_units"], "ft");
        assert!((json["volume"].as_f64().unwrap() - 18.0 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_render_dispatch() {
        let record = compute(&InputState::new(UnitSystem::English, Shape::Cylinder, 1.0, Some(10.0))).unwrap();
        assert_eq!(render(&record, OutputFormat::Html).unwrap(), render_html(&record));
        assert_eq!(render(&record, OutputFormat::Text).unwrap(), render_text(&record));
        assert_eq!(render(&record, OutputFormat::Json).unwrap(), format_json(&record).unwrap());
    }
}
