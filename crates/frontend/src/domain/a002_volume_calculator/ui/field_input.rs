use super::view_model::VolumeCalculatorVm;
use contracts::domain::a002_volume_calculator::FieldId;
use leptos::prelude::*;

/// One labeled dimension input with its error slot.
#[component]
pub fn DimensionField(vm: VolumeCalculatorVm, field: FieldId) -> impl IntoView {
    let error = move || vm.error(field);

    view! {
        <div class="form__group">
            <label class="form__label" for=field.id()>
                {field.label()}
            </label>
            <input
                id=field.id()
                name=field.id()
                class="form__input"
                type="text"
                inputmode="decimal"
                autocomplete="off"
                aria-describedby=field.error_slot_id()
                aria-invalid=move || error().map(|_| "true")
                node_ref=vm.input_ref(field)
                prop:value=move || vm.raw(field)
                on:input=move |ev| vm.input(field, event_target_value(&ev))
            />
            <span id=field.error_slot_id() class="form__error" aria-live="polite">
                {move || error().map(|e| e.to_string())}
            </span>
        </div>
    }
}
