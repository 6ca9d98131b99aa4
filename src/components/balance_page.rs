use leptos::*;

use crate::components::toast::Toasts;
use crate::components::transactions_list::TransactionsList;
use crate::components::withdraw_modal::WithdrawModal;
use crate::models::stats::UserStats;

#[component]
pub fn BalancePage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let stats = expect_context::<RwSignal<UserStats>>();
    let modal_open = create_rw_signal(false);

    view! {
        <section class="page balance-page">
            <div class="balance-card">
                <span class="balance-label">{ "Доступно к выводу" }</span>
                <div class="balance-value">
                    <span>{ move || stats.get().balance }</span>
                    <span>{ " ₽" }</span>
                </div>
                <div class="balance-breakdown">
                    <div>
                        <span>{ "Всего заработано" }</span>
                        <strong>{ move || format!("{} ₽", stats.get().total_earnings) }</strong>
                    </div>
                    <div>
                        <span>{ "В холде" }</span>
                        <strong>{ move || format!("{} ₽", stats.get().hold_balance) }</strong>
                    </div>
                </div>
                <div class="balance-actions">
                    <button class="btn-primary" on:click=move |_| modal_open.set(true)>
                        { "Вывести" }
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| toasts.info("Функция пополнения скоро будет доступна")
                    >
                        { "Пополнить" }
                    </button>
                </div>
            </div>

            <TransactionsList />
            <WithdrawModal open=modal_open />
        </section>
    }
}
