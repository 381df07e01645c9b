pub mod modal_service;

pub use modal_service::ModalService;

use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------+
/// |           header             |
/// +------------------------------+
/// |  category filter | calculator |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header data-zone="header" class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                </div>
            </header>
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
