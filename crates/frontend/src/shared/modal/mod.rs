use crate::layout::ModalService;
use crate::shared::icons::icon;
use contracts::domain::a002_volume_calculator::format::{RESULT_PREFIX, RESULT_SUFFIX};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Dialog showing the computed filler volume.
///
/// The backdrop stays mounted and is toggled with `hidden`, so the close
/// control can be focused right after opening.
#[component]
pub fn ResultModal(modal: ModalService) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                modal.handle_key(&keyboard_event.key());
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            if let Err(err) = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            {
                log::error!("failed to register keydown listener: {:?}", err);
            }
            closure.forget();
        }
    });

    // Only clicks whose target is the backdrop itself close the dialog.
    let handle_backdrop_click = move |ev: ev::MouseEvent| {
        let direct = match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        };
        modal.handle_backdrop_click(direct);
    };

    view! {
        <div
            id="result-modal"
            class="modal-overlay"
            hidden=move || !modal.is_open()
            on:click=handle_backdrop_click
        >
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-text">
                <p id="modal-text" class="modal__text">
                    {move || modal.value().map(|value| view! {
                        {RESULT_PREFIX}
                        <strong>{value}</strong>
                        " cm"<sup>"3"</sup>
                        {RESULT_SUFFIX}
                    })}
                </p>
                <button
                    id="modal-close"
                    type="button"
                    class="button button--icon modal__close"
                    aria-label="Close"
                    node_ref=modal.close_button()
                    on:click=move |_| modal.close()
                >
                    {icon("x")}
                </button>
            </div>
        </div>
    }
}
