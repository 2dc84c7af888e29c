//! Page level helpers: printing and flash message cleanup

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// Server-rendered flash messages that go away on their own
pub const FLASH_SELECTOR: &str = "#flash-messages .alert";

/// Opens the browser print dialog for the current report
pub fn print_report() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.print() {
                log::error!("Failed to open print dialog: {:?}", e);
            }
        }
        None => log::error!("No window object"),
    }
}

/// Removes every flash message after `delay_ms`
pub fn schedule_flash_dismiss(delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let removed = dismiss_flash_messages();
        if removed > 0 {
            log::debug!("Dismissed {} flash messages", removed);
        }
    });
}

fn dismiss_flash_messages() -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(messages) = document.query_selector_all(FLASH_SELECTOR) else {
        return 0;
    };

    // NodeList from querySelectorAll is static, so removing while iterating is fine
    let mut removed = 0;
    for i in 0..messages.length() {
        if let Some(message) = messages.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            message.remove();
            removed += 1;
        }
    }
    removed
}
