// WebAssembly bindings for the volume form
use crate::calculator::VolumeCalculator;
use crate::config::Config;
use crate::error::CalcError;
use crate::form::FormFields;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    fn alert(message: &str);
}

fn to_js_error(error: &CalcError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

#[wasm_bindgen]
pub struct VolumeCalculatorWasm {
    calculator: VolumeCalculator,
}

#[wasm_bindgen]
impl VolumeCalculatorWasm {
    /// Create a calculator, optionally from TOML config text
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<VolumeCalculatorWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content).map_err(|e| to_js_error(&e))?,
            None => Config::empty(),
        };
        Ok(Self {
            calculator: VolumeCalculator::new(&config),
        })
    }

    /// Handler for the Calculate button.
    /// Takes the raw control values and returns HTML for the results region.
    /// Any failure raises a blocking alert before the error is returned;
    /// the results region is left untouched.
    #[wasm_bindgen]
    pub fn calculate(
        &mut self,
        units: &str,
        shape: &str,
        radius: &str,
        height: &str,
    ) -> Result<String, JsValue> {
        let form = FormFields::new(units, shape, radius, height);
        match self.calculator.calculate(form) {
            Ok(_) => Ok(self.calculator.output().to_string()),
            Err(e) => {
                if e.is_invalid_shape() {
                    alert("wrong shape selected");
                } else {
                    alert(&e.to_string());
                }
                Err(to_js_error(&e))
            }
        }
    }

    /// Handler for the Clear button. Returns the (now empty) results HTML.
    #[wasm_bindgen]
    pub fn clear_form(&mut self) -> String {
        self.calculator.reset();
        self.calculator.output().to_string()
    }

    /// Current form values as JSON, so the page can restore its controls after a clear.
    #[wasm_bindgen]
    pub fn form_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.calculator.form())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize form: {}", e)))
    }

    /// Last computed record as JSON, or null when nothing is displayed
    #[wasm_bindgen]
    pub fn result_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.calculator.last_result())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }
}
