//! Simulated withdrawal. Validation happens here in the form layer; on
//! success the modal acknowledges immediately, then a fixed 2 second timer
//! fires the "completed" toast and refreshes the mock balance. No transfer
//! happens and no request record is persisted.
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::logging::log;
use leptos::*;
use thiserror::Error;

use crate::components::toast::Toasts;
use crate::data::{self, MIN_WITHDRAWAL};
use crate::models::stats::UserStats;
use crate::state::WithdrawMethod;

const COMPLETION_DELAY: Duration = Duration::from_secs(2);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WithdrawError {
    #[error("Минимальная сумма вывода - 500 ₽")]
    BelowMinimum,
    #[error("Введите номер карты/кошелька")]
    MissingAccount,
}

/// Checks a withdrawal request. An empty or unparseable amount counts as
/// below the minimum, so it is reported as a too-small amount rather than a
/// separate error.
pub fn validate_withdrawal(amount: &str, account: &str) -> Result<u32, WithdrawError> {
    let amount = amount.trim().parse::<u32>().unwrap_or(0);
    if amount < MIN_WITHDRAWAL {
        return Err(WithdrawError::BelowMinimum);
    }
    if account.trim().is_empty() {
        return Err(WithdrawError::MissingAccount);
    }
    Ok(amount)
}

/// Runs the accepted-request flow: acknowledge immediately, then after the
/// fixed delay fire the completion toast and refresh the mock balance. The
/// timer is never cancelled; it fires even if the balance page is gone.
pub fn submit_withdrawal(toasts: Toasts, stats: RwSignal<UserStats>, amount: u32) {
    toasts.success(format!("Заявка на вывод {amount} ₽ создана"));
    spawn_local(async move {
        sleep(COMPLETION_DELAY).await;
        toasts.success("Деньги успешно выведены!");
        stats.set(data::user_stats());
    });
}

const METHODS: [WithdrawMethod; 3] = [
    WithdrawMethod::Card,
    WithdrawMethod::YooMoney,
    WithdrawMethod::Qiwi,
];

fn method_icon(method: WithdrawMethod) -> &'static str {
    match method {
        WithdrawMethod::Card => "fas fa-credit-card",
        WithdrawMethod::YooMoney => "fas fa-wallet",
        WithdrawMethod::Qiwi => "fas fa-mobile-alt",
    }
}

#[component]
pub fn WithdrawModal(open: RwSignal<bool>) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let stats = expect_context::<RwSignal<UserStats>>();

    let (amount, set_amount) = create_signal(String::new());
    let (account, set_account) = create_signal(String::new());
    let (method, set_method) = create_signal(WithdrawMethod::default());

    let confirm = move |_| {
        match validate_withdrawal(&amount.get(), &account.get()) {
            Err(err) => toasts.error(err.to_string()),
            Ok(value) => {
                log!("[WITHDRAW] request for {} ₽ via {:?}", value, method.get());
                open.set(false);
                set_amount.set(String::new());
                set_account.set(String::new());
                submit_withdrawal(toasts, stats, value);
            }
        }
    };

    view! {
        <div class="modal" class:active=move || open.get()>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{ "Вывод средств" }</h3>
                    <button class="modal-close" on:click=move |_| open.set(false)>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="modal-body">
                    <div class="form-group">
                        <label>{ "Сумма вывода" }</label>
                        <div class="amount-input">
                            <input
                                type="number"
                                placeholder="500"
                                prop:value=amount
                                on:input=move |e| set_amount.set(event_target_value(&e))
                            />
                            <span>{ "₽" }</span>
                        </div>
                        <div class="amount-hint">
                            { move || format!("Доступно: {} ₽", stats.get().balance) }
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{ "Способ получения" }</label>
                        <div class="methods-select">
                            {METHODS.into_iter().map(|option| view! {
                                <button
                                    class="method-option"
                                    class:active=move || method.get() == option
                                    on:click=move |_| set_method.set(option)
                                >
                                    <i class=method_icon(option)></i>
                                    <span>{ option.label() }</span>
                                </button>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{ "Номер карты/кошелька" }</label>
                        <input
                            type="text"
                            placeholder="0000 0000 0000 0000"
                            prop:value=account
                            on:input=move |e| set_account.set(event_target_value(&e))
                        />
                    </div>

                    <button class="btn-withdraw" on:click=confirm>
                        { "Вывести средства" }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_minimum_is_rejected() {
        assert_eq!(
            validate_withdrawal("499", "1234 5678"),
            Err(WithdrawError::BelowMinimum)
        );
        assert_eq!(validate_withdrawal("0", "1234"), Err(WithdrawError::BelowMinimum));
    }

    #[test]
    fn empty_or_garbage_amount_counts_as_below_minimum() {
        assert_eq!(validate_withdrawal("", "1234"), Err(WithdrawError::BelowMinimum));
        assert_eq!(validate_withdrawal("abc", "1234"), Err(WithdrawError::BelowMinimum));
        assert_eq!(validate_withdrawal("-500", "1234"), Err(WithdrawError::BelowMinimum));
    }

    #[test]
    fn missing_account_is_rejected_after_amount() {
        assert_eq!(validate_withdrawal("500", ""), Err(WithdrawError::MissingAccount));
        assert_eq!(validate_withdrawal("500", "   "), Err(WithdrawError::MissingAccount));
    }

    #[test]
    fn threshold_amount_with_account_passes() {
        assert_eq!(validate_withdrawal("500", "1234 5678"), Ok(500));
        assert_eq!(validate_withdrawal(" 750 ", "wallet-1"), Ok(750));
    }
}
