//! Bridge to the embedding Telegram client. The `window.Telegram.WebApp`
//! global is reached through wasm-bindgen extern bindings; the rest of the
//! app only sees the [`HostBridge`] trait so components can be driven by a
//! no-op bridge in tests or outside Telegram.

use std::rc::Rc;

use gloo_utils::format::JsValueSerdeExt;
use js_sys::Reflect;
use leptos::logging::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::user::TelegramUser;
use crate::state::ColorScheme;

/// Capability surface the app consumes from the host.
pub trait HostBridge {
    fn expand(&self);
    fn enable_closing_confirmation(&self);
    fn set_header_color(&self, color: &str);
    fn set_background_color(&self, color: &str);
    fn show_back_button(&self);
    /// Registers the back-gesture handler. Handlers live for the whole page
    /// session; there is no way to unregister.
    fn on_back_button(&self, handler: Box<dyn Fn()>);
    fn color_scheme(&self) -> ColorScheme;
    /// The unsigned user object from `initDataUnsafe`, if the host sent one.
    fn user(&self) -> Option<TelegramUser>;
    /// Subscribes to a host event ("themeChanged", "viewportChanged").
    fn on_event(&self, event: &str, handler: Box<dyn Fn()>);
    fn open_telegram_link(&self, url: &str);
    fn close(&self);
}

#[wasm_bindgen]
extern "C" {
    type WebApp;

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);

    #[wasm_bindgen(method, js_name = "enableClosingConfirmation")]
    fn enable_closing_confirmation(this: &WebApp);

    #[wasm_bindgen(method, js_name = "setHeaderColor")]
    fn set_header_color(this: &WebApp, color: &str);

    #[wasm_bindgen(method, js_name = "setBackgroundColor")]
    fn set_background_color(this: &WebApp, color: &str);

    #[wasm_bindgen(method, getter, js_name = "colorScheme")]
    fn color_scheme(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter, js_name = "initDataUnsafe")]
    fn init_data_unsafe(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, js_name = "onEvent")]
    fn on_event(this: &WebApp, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = "openTelegramLink")]
    fn open_telegram_link(this: &WebApp, url: &str);

    #[wasm_bindgen(method)]
    fn close(this: &WebApp);

    #[wasm_bindgen(method, getter, js_name = "BackButton")]
    fn back_button(this: &WebApp) -> BackButton;

    type BackButton;

    #[wasm_bindgen(method)]
    fn show(this: &BackButton);

    #[wasm_bindgen(method, js_name = "onClick")]
    fn on_click(this: &BackButton, handler: &js_sys::Function);
}

/// The real host, wrapping `window.Telegram.WebApp`.
pub struct TelegramBridge {
    webapp: WebApp,
}

impl TelegramBridge {
    /// Probes for the host global. Returns `None` when the page is opened
    /// outside Telegram (plain browser tab, tests).
    fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = Reflect::get(&window, &"Telegram".into()).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let webapp = Reflect::get(&telegram, &"WebApp".into()).ok()?;
        if webapp.is_undefined() || webapp.is_null() {
            return None;
        }
        Some(Self {
            webapp: webapp.unchecked_into(),
        })
    }

    fn register(&self, register: impl FnOnce(&js_sys::Function), handler: Box<dyn Fn()>) {
        let closure = Closure::wrap(handler);
        register(closure.as_ref().unchecked_ref());
        // Host-event handlers live as long as the page does.
        closure.forget();
    }
}

impl HostBridge for TelegramBridge {
    fn expand(&self) {
        self.webapp.expand();
    }

    fn enable_closing_confirmation(&self) {
        self.webapp.enable_closing_confirmation();
    }

    fn set_header_color(&self, color: &str) {
        self.webapp.set_header_color(color);
    }

    fn set_background_color(&self, color: &str) {
        self.webapp.set_background_color(color);
    }

    fn show_back_button(&self) {
        self.webapp.back_button().show();
    }

    fn on_back_button(&self, handler: Box<dyn Fn()>) {
        let button = self.webapp.back_button();
        self.register(|f| button.on_click(f), handler);
    }

    fn color_scheme(&self) -> ColorScheme {
        match self.webapp.color_scheme().as_string() {
            Some(scheme) => ColorScheme::parse(&scheme),
            None => ColorScheme::Light,
        }
    }

    fn user(&self) -> Option<TelegramUser> {
        let init_data = self.webapp.init_data_unsafe();
        let user = Reflect::get(&init_data, &"user".into()).ok()?;
        if user.is_undefined() || user.is_null() {
            return None;
        }
        match user.into_serde::<TelegramUser>() {
            Ok(user) => Some(user),
            Err(err) => {
                log!("[BRIDGE] unreadable user object: {err}");
                None
            }
        }
    }

    fn on_event(&self, event: &str, handler: Box<dyn Fn()>) {
        self.register(|f| self.webapp.on_event(event, f), handler);
    }

    fn open_telegram_link(&self, url: &str) {
        self.webapp.open_telegram_link(url);
    }

    fn close(&self) {
        self.webapp.close();
    }
}

/// No-op bridge used when the host global is absent. Reports a light scheme
/// and no user, so the app falls back to the guest identity.
pub struct NullBridge;

impl HostBridge for NullBridge {
    fn expand(&self) {}
    fn enable_closing_confirmation(&self) {}
    fn set_header_color(&self, _color: &str) {}
    fn set_background_color(&self, _color: &str) {}
    fn show_back_button(&self) {}
    fn on_back_button(&self, _handler: Box<dyn Fn()>) {}
    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }
    fn user(&self) -> Option<TelegramUser> {
        None
    }
    fn on_event(&self, _event: &str, _handler: Box<dyn Fn()>) {}
    fn open_telegram_link(&self, _url: &str) {}
    fn close(&self) {}
}

/// Picks the real bridge when the host global is present, the null bridge
/// otherwise.
pub fn detect() -> Rc<dyn HostBridge> {
    match TelegramBridge::from_window() {
        Some(bridge) => Rc::new(bridge),
        None => {
            log!("[BRIDGE] Telegram WebApp object not found, running detached");
            Rc::new(NullBridge)
        }
    }
}
