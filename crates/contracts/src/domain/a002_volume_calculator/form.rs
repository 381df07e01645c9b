use super::field::{FieldId, FieldState, ValidationError};
use super::format::{format_volume, result_message};

/// Raw text of one input plus the outcome of its last validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldInput {
    pub raw: String,
    pub state: FieldState,
}

/// Product of the three validated dimensions, in cm³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(pub f64);

impl Volume {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn formatted(self) -> String {
        format_volume(self.0)
    }

    pub fn message(self) -> String {
        result_message(&self.formatted())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field was valid. The form has already been reset.
    Calculated(Volume),
    /// At least one field was invalid; `first_invalid` should get focus.
    Rejected {
        first_invalid: FieldId,
        invalid_count: usize,
    },
}

/// State of the length/width/height form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorForm {
    fields: [FieldInput; 3],
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, id: FieldId) -> &FieldInput {
        &self.fields[id.index()]
    }

    pub fn raw(&self, id: FieldId) -> &str {
        &self.field(id).raw
    }

    pub fn error(&self, id: FieldId) -> Option<ValidationError> {
        self.field(id).state.error()
    }

    /// A keystroke: store the text and drop this field's validation result.
    /// Other fields keep their errors.
    pub fn input(&mut self, id: FieldId, raw: impl Into<String>) {
        let field = &mut self.fields[id.index()];
        field.raw = raw.into();
        field.state = FieldState::Unvalidated;
    }

    /// Validate every field in declared order. On success compute the volume
    /// and reset the form; otherwise keep the input and report the first
    /// invalid field.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut first_invalid = None;
        let mut invalid_count = 0;

        for id in FieldId::ALL {
            let field = &mut self.fields[id.index()];
            field.state = FieldState::validate(&field.raw);
            if field.state.is_invalid() {
                invalid_count += 1;
                first_invalid.get_or_insert(id);
            }
        }

        if let Some(first_invalid) = first_invalid {
            return SubmitOutcome::Rejected {
                first_invalid,
                invalid_count,
            };
        }

        let volume = self
            .fields
            .iter()
            .filter_map(|f| f.state.value())
            .product::<f64>();
        self.reset();
        SubmitOutcome::Calculated(Volume(volume))
    }

    /// Clear every field's text and validation state.
    pub fn reset(&mut self) {
        self.fields = Default::default();
    }
}
