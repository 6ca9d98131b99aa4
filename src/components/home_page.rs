//! Home dashboard: greeting, headline stats, quick actions and the referral
//! card with a copy-to-clipboard link.
use std::rc::Rc;

use leptos::*;

use crate::data;
use crate::components::toast::Toasts;
use crate::models::stats::UserStats;
use crate::models::user::TelegramUser;
use crate::state::{EarnTab, Page};
use crate::telegram::HostBridge;

fn copy_to_clipboard(text: &str) -> bool {
    match web_sys::window() {
        Some(window) => {
            // Fire and forget; the confirmation toast is optimistic, the
            // write promise is not awaited.
            let _ = window.navigator().clipboard().write_text(text);
            true
        }
        None => false,
    }
}

#[component]
pub fn HomePage(page: RwSignal<Page>, earn_tab: RwSignal<EarnTab>) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let bridge = expect_context::<Rc<dyn HostBridge>>();
    let stats = expect_context::<RwSignal<UserStats>>();
    let user = expect_context::<TelegramUser>();

    let referral = data::referral_link(user.id);
    let referral_for_copy = referral.clone();
    let referral_for_invite = referral.clone();

    let copy_link = move |_| {
        if copy_to_clipboard(&referral_for_copy) {
            toasts.success("Ссылка скопирована в буфер обмена");
        } else {
            toasts.error("Не удалось скопировать ссылку");
        }
    };

    let invite = move |_| {
        copy_to_clipboard(&referral_for_invite);
        toasts.success("Реферальная ссылка скопирована");
    };
    let go_offers = move |_| {
        earn_tab.set(EarnTab::Offers);
        page.set(Page::Earn);
    };
    let go_support = move |_| page.set(Page::Help);
    let open_bot = move |_| bridge.open_telegram_link(data::BOT_URL);

    view! {
        <section class="page home-page">
            <div class="greeting-card">
                <h2>{ format!("Привет, {}!", user.first_name) }</h2>
                <p>{ "Выполняйте предложения и зарабатывайте" }</p>
                <div class="balance-chip">
                    <i class="fas fa-wallet"></i>
                    <span>{ move || stats.get().balance }</span>
                    <span>{ " ₽" }</span>
                </div>
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <span class="stat-value">{ move || format!("{} ₽", stats.get().total_earnings) }</span>
                    <span class="stat-label">{ "Всего заработано" }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{ move || stats.get().referrals }</span>
                    <span class="stat-label">{ "Рефералов" }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{ move || stats.get().completed_offers }</span>
                    <span class="stat-label">{ "Выполнено" }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{ move || stats.get().active_days }</span>
                    <span class="stat-label">{ "Дней с нами" }</span>
                </div>
            </div>

            <h3>{ "Быстрые действия" }</h3>
            <div class="quick-actions">
                <button class="quick-action" on:click=invite>
                    <i class="fas fa-user-plus"></i>
                    <span>{ "Пригласить" }</span>
                </button>
                <button class="quick-action" on:click=go_offers>
                    <i class="fas fa-fire"></i>
                    <span>{ "Предложения" }</span>
                </button>
                <button class="quick-action" on:click=go_support>
                    <i class="fas fa-headset"></i>
                    <span>{ "Поддержка" }</span>
                </button>
                <button class="quick-action" on:click=open_bot>
                    <i class="fas fa-robot"></i>
                    <span>{ "Наш бот" }</span>
                </button>
            </div>

            <div class="referral-card">
                <h3>{ "Приглашайте друзей" }</h3>
                <p>{ "Получайте 10% от заработка каждого приглашенного" }</p>
                <div class="referral-row">
                    <input type="text" readonly prop:value=referral />
                    <button class="btn-copy" on:click=copy_link>
                        <i class="fas fa-copy"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}
