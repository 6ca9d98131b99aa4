//! Root component. Wires the host bridge, theme, storage and toast context
//! together and switches between the five pages.
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::logging::log;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::components::balance_page::BalancePage;
use crate::components::faq_list::FaqList;
use crate::components::home_page::HomePage;
use crate::components::nav_bar::NavBar;
use crate::components::offers_list::OffersList;
use crate::components::reviews_page::ReviewsPage;
use crate::components::toast::{ToastContainer, Toasts};
use crate::data;
use crate::models::user::TelegramUser;
use crate::state::{EarnTab, Page, Theme};
use crate::storage::{self, BrowserStorage, KeyValueStore, MemoryStore, ReviewStore};
use crate::telegram::{self, HostBridge};

/// How long the preloader covers the app on startup.
const PRELOAD_DELAY: Duration = Duration::from_millis(1500);

fn chrome_colors(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Light => ("#4f46e5", "#f8fafc"),
        Theme::Dark => ("#1e293b", "#0f172a"),
    }
}

fn apply_document_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Back gesture: pop browser history if there is any, otherwise hand
/// control back to the host.
fn handle_back(bridge: &dyn HostBridge) {
    let went_back = web_sys::window()
        .and_then(|w| {
            let history = w.history().ok()?;
            if history.length().unwrap_or(0) > 1 {
                history.back().ok()?;
                Some(())
            } else {
                None
            }
        })
        .is_some();
    if !went_back {
        bridge.close();
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bridge: Rc<dyn HostBridge> = telegram::detect();
    let kv: Rc<dyn KeyValueStore> = match BrowserStorage::new() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            // Session-only fallback; nothing survives a reload.
            log!("[APP] {err}, falling back to in-memory storage");
            Rc::new(MemoryStore::new())
        }
    };

    let user = bridge.user().unwrap_or_else(TelegramUser::guest);
    let theme = create_rw_signal(
        storage::load_theme(kv.as_ref())
            .unwrap_or_else(|| bridge.color_scheme().as_theme()),
    );

    // Host chrome setup, once per page session.
    bridge.expand();
    bridge.enable_closing_confirmation();
    bridge.show_back_button();
    {
        let bridge_ref = bridge.clone();
        bridge.on_back_button(Box::new(move || handle_back(bridge_ref.as_ref())));
    }
    {
        let bridge_ref = bridge.clone();
        bridge.on_event(
            "themeChanged",
            Box::new(move || theme.set(bridge_ref.color_scheme().as_theme())),
        );
    }
    bridge.on_event(
        "viewportChanged",
        Box::new(|| log!("[APP] viewport changed")),
    );

    // Keep the document attribute and host chrome in sync with the theme.
    {
        let bridge_ref = bridge.clone();
        create_effect(move |_| {
            let current = theme.get();
            apply_document_theme(current);
            let (header, background) = chrome_colors(current);
            bridge_ref.set_header_color(header);
            bridge_ref.set_background_color(background);
        });
    }

    let toasts = Toasts::new();
    let stats = create_rw_signal(data::user_stats());
    provide_context(toasts);
    provide_context(stats);
    provide_context(bridge.clone());
    provide_context(ReviewStore::new(kv.clone()));
    provide_context(user.clone());

    let page = create_rw_signal(Page::Home);
    let earn_tab = create_rw_signal(EarnTab::Offers);
    let loading = create_rw_signal(true);

    toasts.success(format!("Добро пожаловать, {}!", user.first_name));
    spawn_local(async move {
        sleep(PRELOAD_DELAY).await;
        loading.set(false);
    });

    let theme_kv = kv.clone();
    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        storage::save_theme(theme_kv.as_ref(), next);
    };

    let user_name = user.first_name.clone();

    view! {
        <Title text="Финансовый помощник" />
        <ToastContainer />
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="preloader">
                    <div class="spinner"></div>
                </div>
            }
        >
            <div class="app-container">
                <header class="app-header">
                    <div class="header-user">
                        <span>{ user_name.clone() }</span>
                    </div>
                    <h1>{ move || page.get().title() }</h1>
                    <button class="theme-toggle" on:click=toggle_theme.clone()>
                        <i class=move || match theme.get() {
                            Theme::Dark => "fas fa-sun",
                            Theme::Light => "fas fa-moon",
                        }></i>
                    </button>
                </header>

                <main class="pages">
                    {move || match page.get() {
                        Page::Home => view! { <HomePage page=page earn_tab=earn_tab /> }.into_view(),
                        Page::Earn => view! { <EarnPage earn_tab=earn_tab /> }.into_view(),
                        Page::Balance => view! { <BalancePage /> }.into_view(),
                        Page::Reviews => view! { <ReviewsPage /> }.into_view(),
                        Page::Help => view! {
                            <section class="page help-page">
                                <h3>{ "Частые вопросы" }</h3>
                                <FaqList />
                            </section>
                        }.into_view(),
                    }}
                </main>

                <NavBar page=page />
            </div>
        </Show>
    }
}

/// Earn page: an offers tab and a tasks tab, one active at a time.
#[component]
fn EarnPage(earn_tab: RwSignal<EarnTab>) -> impl IntoView {
    view! {
        <section class="page earn-page">
            <div class="tabs">
                <button
                    class="tab-btn"
                    class:active=move || earn_tab.get() == EarnTab::Offers
                    on:click=move |_| earn_tab.set(EarnTab::Offers)
                >
                    { "Предложения" }
                </button>
                <button
                    class="tab-btn"
                    class:active=move || earn_tab.get() == EarnTab::Tasks
                    on:click=move |_| earn_tab.set(EarnTab::Tasks)
                >
                    { "Задания" }
                </button>
            </div>
            {move || match earn_tab.get() {
                EarnTab::Offers => view! { <OffersList /> }.into_view(),
                EarnTab::Tasks => view! {
                    <div class="tab-placeholder">
                        <i class="fas fa-tasks"></i>
                        <p>{ "Задания скоро появятся" }</p>
                    </div>
                }.into_view(),
            }}
        </section>
    }
}
