//! Drives the accepted-withdrawal flow end to end: immediate acknowledgment,
//! then the delayed completion toast and the balance refresh. Runs only under
//! `wasm-pack test --headless --chrome`; native `cargo test` compiles this
//! file to nothing.
#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::create_rw_signal;
use rewards_miniapp::components::toast::{ToastKind, Toasts};
use rewards_miniapp::components::withdraw_modal::submit_withdrawal;
use rewards_miniapp::data;
use rewards_miniapp::models::stats::UserStats;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn drained_stats() -> UserStats {
    UserStats {
        balance: 0,
        total_earnings: 3250,
        referrals: 5,
        completed_offers: 12,
        active_days: 7,
        hold_balance: 750,
    }
}

#[wasm_bindgen_test]
async fn accepted_request_acknowledges_twice_and_refreshes_balance() {
    let toasts = Toasts::new();
    let stats = create_rw_signal(drained_stats());

    submit_withdrawal(toasts, stats, 500);

    // First acknowledgment is synchronous; the balance is untouched so far.
    let shown = toasts.current();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Success);
    assert_eq!(shown[0].message, "Заявка на вывод 500 ₽ создана");
    assert_eq!(stats.get_untracked().balance, 0);

    // Past the 2 second completion delay, before the first toast expires.
    sleep(Duration::from_millis(2300)).await;

    let shown = toasts.current();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[1].kind, ToastKind::Success);
    assert_eq!(shown[1].message, "Деньги успешно выведены!");
    assert_eq!(stats.get_untracked(), data::user_stats());
}
