use leptos::*;

use crate::models::review::Review;

/// Renders an already-sorted list of reviews with like/dislike actions.
#[component]
pub fn ReviewsList(
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(into)] on_like: Callback<i64>,
    #[prop(into)] on_dislike: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="reviews-list">
            {move || reviews.get().into_iter().map(|review| {
                let avatar = review.user.chars().next().unwrap_or('?').to_string();
                let stars = "★".repeat(review.rating as usize)
                    + &"☆".repeat(5usize.saturating_sub(review.rating as usize));
                let id = review.id;
                view! {
                    <div class="review-item">
                        <div class="review-header">
                            <div class="review-user">
                                <div class="user-avatar">{ avatar }</div>
                                <div class="user-info">
                                    <h4>{ review.user }</h4>
                                    <span>{ review.date }</span>
                                </div>
                            </div>
                            <div class="review-rating">{ stars }</div>
                        </div>
                        <p class="review-text">{ review.text }</p>
                        <div class="review-footer">
                            <div class="review-actions">
                                <button class="review-action" on:click=move |_| on_like.call(id)>
                                    <i class="fas fa-thumbs-up"></i>
                                    { format!(" {}", review.likes) }
                                </button>
                                <button class="review-action" on:click=move |_| on_dislike.call(id)>
                                    <i class="fas fa-thumbs-down"></i>
                                    { format!(" {}", review.dislikes) }
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
