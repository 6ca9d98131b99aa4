use leptos::*;

use crate::data;

/// FAQ accordion on the help page. Each item toggles independently.
#[component]
pub fn FaqList() -> impl IntoView {
    view! {
        <div class="faq-list">
            {data::faq_entries().into_iter().map(|(question, answer)| {
                let open = create_rw_signal(false);
                view! {
                    <div class="faq-item" class:active=move || open.get()>
                        <button class="faq-question" on:click=move |_| open.update(|o| *o = !*o)>
                            <span>{ question }</span>
                            <i class=move || if open.get() { "fas fa-chevron-up" } else { "fas fa-chevron-down" }></i>
                        </button>
                        <div class="faq-answer">
                            <p>{ answer }</p>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
