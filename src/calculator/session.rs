use crate::config::{Config, FormDefaults};
use crate::error::CalcError;
use crate::form::FormFields;
use crate::geometry::{self, InputState, ResultRecord};
use crate::render::render_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorState {
    /// Nothing rendered yet, or the form was just cleared.
    Idle,
    /// The output region holds a rendered result.
    Displayed,
}

/// A form, its results region, and the two actions wired to them.
#[derive(Debug, Clone)]
pub struct VolumeCalculator {
    defaults: FormDefaults,
    form: FormFields,
    output: String,
    last: Option<ResultRecord>,
}

impl Default for VolumeCalculator {
    fn default() -> Self {
        Self::new(&Config::empty())
    }
}

impl VolumeCalculator {
    pub fn new(config: &Config) -> Self {
        Self {
            defaults: config.defaults,
            form: config.defaults.blank_form(),
            output: String::new(),
            last: None,
        }
    }

    pub fn state(&self) -> CalculatorState {
        if self.last.is_some() {
            CalculatorState::Displayed
        } else {
            CalculatorState::Idle
        }
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn set_form(&mut self, form: FormFields) {
        self.form = form;
    }

    /// Current contents of the results region. Empty while idle.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn last_result(&self) -> Option<&ResultRecord> {
        self.last.as_ref()
    }

    /// Read the form, compute, and replace the results region.
    ///
    /// On error the region and state are left exactly as they were.
    pub fn compute(&mut self) -> Result<&ResultRecord, CalcError> {
        let input = self.form.to_input_state().inspect_err(|e| {
            tracing::warn!(error = %e, "rejected form input");
        })?;
        self.compute_input(&input)
    }

    /// Store `form` and compute from it.
    pub fn calculate(&mut self, form: FormFields) -> Result<&ResultRecord, CalcError> {
        self.form = form;
        self.compute()
    }

    /// Compute from an already-typed request, bypassing the form.
    pub fn compute_input(&mut self, input: &InputState) -> Result<&ResultRecord, CalcError> {
        let record = geometry::compute(input)?;
        self.output = render_html(&record);
        Ok(&*self.last.insert(record))
    }

    /// Restore form defaults and empty the results region.
    pub fn reset(&mut self) {
        tracing::debug!("resetting form");
        self.form = self.defaults.blank_form();
        self.output.clear();
        self.last = None;
    }
}
