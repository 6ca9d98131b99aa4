//! Transient notifications. Toasts are pushed into a context-provided signal
//! and removed by a fixed 3 second timer; the timer is never cancelled, it
//! just finds nothing to remove if the toast is already gone.
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
            ToastKind::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle stored in the Leptos context; any component can show a toast.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });

        let items = self.items;
        spawn_local(async move {
            sleep(TOAST_LIFETIME).await;
            items.update(|items| items.retain(|toast| toast.id != id));
        });
    }

    /// Snapshot of the toasts currently on screen, oldest first.
    pub fn current(&self) -> Vec<Toast> {
        self.items.get_untracked()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-container">
            {move || toasts.items.get().iter().map(|toast| view! {
                <div class=toast.kind.class()>
                    <i class=toast.kind.icon()></i>
                    <span>{ toast.message.clone() }</span>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
