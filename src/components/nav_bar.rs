use leptos::*;

use crate::state::Page;

const NAV_ITEMS: [(Page, &str, &str); 5] = [
    (Page::Home, "fas fa-home", "Главная"),
    (Page::Earn, "fas fa-coins", "Заработок"),
    (Page::Balance, "fas fa-wallet", "Баланс"),
    (Page::Reviews, "fas fa-star", "Отзывы"),
    (Page::Help, "fas fa-question-circle", "Помощь"),
];

/// Bottom navigation. Exactly one item is active, mirroring the current page.
#[component]
pub fn NavBar(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            {NAV_ITEMS.into_iter().map(|(target, icon, label)| view! {
                <button
                    class="nav-item"
                    class:active=move || page.get() == target
                    on:click=move |_| page.set(target)
                >
                    <i class=icon></i>
                    <span>{ label }</span>
                </button>
            }).collect::<Vec<_>>()}
        </nav>
    }
}
