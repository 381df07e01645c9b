use super::field_input::DimensionField;
use super::view_model::VolumeCalculatorVm;
use crate::layout::ModalService;
use crate::shared::icons::icon;
use contracts::domain::a002_volume_calculator::FieldId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn VolumeCalculator(vm: VolumeCalculatorVm, modal: ModalService) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit(modal);
    };

    view! {
        <section class="calculator">
            <h2 class="calculator__title">
                {icon("box")}
                <span>"How much filler do you need?"</span>
            </h2>
            <form id="calc-form" class="form" novalidate=true on:submit=on_submit>
                {FieldId::ALL
                    .into_iter()
                    .map(|field| view! { <DimensionField vm=vm field=field /> })
                    .collect_view()}
                <button type="submit" class="button button--primary">
                    "Calculate"
                </button>
            </form>
        </section>
    }
}
