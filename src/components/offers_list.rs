use leptos::*;

use crate::components::toast::Toasts;
use crate::data;

/// Active offers on the earn page. Clicking a card only acknowledges the
/// start; completion tracking lives with the partner bot, not here.
#[component]
pub fn OffersList() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let offers = data::active_offers();
    let count = offers.len();

    view! {
        <div class="offers-block">
            <div class="offers-header">
                <h3>{ "Активные предложения" }</h3>
                <span class="offers-count">{ count }</span>
            </div>
            {offers.into_iter().map(|offer| {
                let title = offer.title.clone();
                view! {
                    <div
                        class="offer-card"
                        on:click=move |_| toasts.info(format!("Начали предложение \"{title}\""))
                    >
                        <div class="offer-header">
                            <h4 class="offer-title">{ offer.title }</h4>
                            <span class="offer-reward">{ format!("+{} ₽", offer.reward) }</span>
                        </div>
                        <p class="offer-description">{ offer.description }</p>
                        <div class="offer-stats">
                            <span><i class="fas fa-users"></i> { format!("{} выполнено", offer.completed_count) }</span>
                            <span><i class="fas fa-clock"></i> { offer.estimated_time }</span>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
