use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Focus an element on the next tick.
///
/// The lookup runs after pending reactive DOM updates (e.g. un-hiding the
/// result dialog) have been applied; a missing element is ignored.
pub fn focus_next_tick<F>(lookup: F)
where
    F: FnOnce() -> Option<web_sys::HtmlElement> + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        match lookup() {
            Some(element) => {
                if let Err(err) = element.focus() {
                    log::warn!("focus failed: {:?}", err);
                }
            }
            None => log::debug!("focus target not mounted"),
        }
    });
}
