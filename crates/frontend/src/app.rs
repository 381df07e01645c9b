use crate::domain::a001_category_filter::ui::{CategoryFilter, CategoryFilterVm};
use crate::domain::a002_volume_calculator::ui::{VolumeCalculator, VolumeCalculatorVm};
use crate::layout::{ModalService, Shell};
use crate::shared::modal::ResultModal;
use contracts::shared::PageConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    // View-models are created once here and handed to the components that use them.
    let filter = CategoryFilterVm::new();
    let calculator = VolumeCalculatorVm::new();
    let modal = ModalService::new();

    let title = config.title.clone();

    view! {
        <Shell title=title>
            <CategoryFilter vm=filter config=config />
            <VolumeCalculator vm=calculator modal=modal />
        </Shell>
        <ResultModal modal=modal />
    }
}

/// Rendered instead of the page when the embedded configuration is unusable.
#[component]
pub fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="error" role="alert">
            <h1>"Page configuration error"</h1>
            <pre>{message}</pre>
        </div>
    }
}
