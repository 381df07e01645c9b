//! ViewModel for the volume calculator form
//!
//! Holds the form state in a single signal and one `NodeRef` per input so the
//! submit handler can move focus without looking elements up by id.

use crate::layout::ModalService;
use crate::shared::focus::focus_next_tick;
use contracts::domain::a002_volume_calculator::{
    CalculatorForm, FieldId, SubmitOutcome, ValidationError,
};
use leptos::html;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct VolumeCalculatorVm {
    pub form: RwSignal<CalculatorForm>,
    inputs: [NodeRef<html::Input>; 3],
}

impl VolumeCalculatorVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CalculatorForm::new()),
            inputs: [NodeRef::new(), NodeRef::new(), NodeRef::new()],
        }
    }

    pub fn input_ref(&self, field: FieldId) -> NodeRef<html::Input> {
        self.inputs[field.index()]
    }

    pub fn raw(&self, field: FieldId) -> String {
        self.form.with(|f| f.raw(field).to_string())
    }

    pub fn error(&self, field: FieldId) -> Option<ValidationError> {
        self.form.with(|f| f.error(field))
    }

    /// Keystroke in one field. Clears that field's error only.
    pub fn input(&self, field: FieldId, value: String) {
        let had_error = self.form.with_untracked(|f| f.error(field).is_some());
        self.form.update(|f| f.input(field, value));
        if had_error {
            log::debug!("cleared validation error on '{}'", field.id());
        }
    }

    /// Form submit: validate all fields, then either open the result dialog
    /// or focus the first invalid field.
    pub fn submit(&self, modal: ModalService) {
        let Some(outcome) = self.form.try_update(|f| f.submit()) else {
            return;
        };

        match outcome {
            SubmitOutcome::Calculated(volume) => {
                log::info!("volume calculated: {} cm³", volume.formatted());
                modal.open(volume.formatted());
            }
            SubmitOutcome::Rejected {
                first_invalid,
                invalid_count,
            } => {
                log::debug!(
                    "submit rejected: {} invalid field(s), focusing '{}'",
                    invalid_count,
                    first_invalid.id()
                );
                let input = self.input_ref(first_invalid);
                focus_next_tick(move || input.get_untracked().map(Into::into));
            }
        }
    }
}

impl Default for VolumeCalculatorVm {
    fn default() -> Self {
        Self::new()
    }
}
