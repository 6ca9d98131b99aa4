use std::panic;

use leptos::logging::log;

/// Sets up a panic hook that tags wasm panics in the console before the
/// default hook prints the backtrace. Inside the Telegram webview there is
/// no devtools prompt, so a loud marker is the only trace a crash leaves.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        log!("[PANIC] mini app crashed: {message}");

        // Original hook last, so the marker line comes first in the console.
        original_hook(panic_info);
    }));
}

/// Call once from main before mounting.
pub fn init() {
    console_error_panic_hook::set_once();
    set_custom_panic_hook();
}
