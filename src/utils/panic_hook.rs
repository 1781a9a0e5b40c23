use std::panic;
use leptos::logging::{error, log};

/// Installs `console_error_panic_hook` and adds a tagged summary line after it,
/// so panics in the browser bundle are easy to spot in the console.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        error!("[PANIC] {}", panic_message(panic_info.payload()));
        if let Some(location) = panic_info.location() {
            error!("[PANIC] at {}:{}", location.file(), location.line());
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Call from the hydrate or client-side entry point
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
