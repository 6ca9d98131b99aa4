use leptos::*;

use crate::components::toast::Toasts;
use crate::data;
use crate::models::transaction::TransactionKind;

#[component]
pub fn TransactionsList() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="transactions-block">
            <div class="transactions-header">
                <h3>{ "История операций" }</h3>
                <button
                    class="btn-filter"
                    on:click=move |_| toasts.info("Фильтр по транзакциям скоро будет доступен")
                >
                    <i class="fas fa-filter"></i>
                </button>
            </div>
            {data::transactions().into_iter().map(|tx| {
                let sign = match tx.kind {
                    TransactionKind::Income => "+",
                    TransactionKind::Outcome => "-",
                };
                let (icon_class, arrow) = match tx.kind {
                    TransactionKind::Income => ("transaction-icon income", "fas fa-arrow-down"),
                    TransactionKind::Outcome => ("transaction-icon outcome", "fas fa-arrow-up"),
                };
                let amount_class = match tx.kind {
                    TransactionKind::Income => "transaction-amount income",
                    TransactionKind::Outcome => "transaction-amount outcome",
                };
                view! {
                    <div class="transaction-item">
                        <div class=icon_class>
                            <i class=arrow></i>
                        </div>
                        <div class="transaction-details">
                            <h4 class="transaction-title">{ tx.title }</h4>
                            <p class="transaction-date">{ tx.date }</p>
                        </div>
                        <div class=amount_class>
                            { format!("{}{} ₽", sign, tx.amount) }
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
