//! Reviews page: sort select, submission form and the persisted list.
//! The list re-reads the store after every mutation and re-sorts on every
//! render; nothing is cached between renders.
use leptos::logging::log;
use leptos::*;

use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::toast::Toasts;
use crate::models::review::Review;
use crate::models::user::TelegramUser;
use crate::state::ReviewSort;
use crate::storage::{sorted, ReviewStore};

fn load(store: &ReviewStore) -> Vec<Review> {
    match store.list() {
        Ok(reviews) => reviews,
        Err(err) => {
            log!("[REVIEWS] load failed: {err}");
            Vec::new()
        }
    }
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let store = expect_context::<ReviewStore>();
    let user = expect_context::<TelegramUser>();

    let reviews = create_rw_signal(load(&store));
    let (sort, set_sort) = create_signal(ReviewSort::default());

    let submit_store = store.clone();
    let on_submit = move |(rating, text): (u8, String)| {
        let review = Review::new(user.first_name.clone(), rating, text);
        match submit_store.add(review) {
            Ok(()) => {
                reviews.set(load(&submit_store));
                toasts.success("Спасибо за ваш отзыв!");
            }
            Err(err) => {
                log!("[REVIEWS] save failed: {err}");
                toasts.error("Не удалось сохранить отзыв");
            }
        }
    };

    let like_store = store.clone();
    let on_like = move |id: i64| {
        match like_store.increment_like(id) {
            Ok(()) => {
                reviews.set(load(&like_store));
                toasts.success("Спасибо за вашу оценку!");
            }
            Err(err) => log!("[REVIEWS] like failed: {err}"),
        }
    };

    let dislike_store = store.clone();
    let on_dislike = move |id: i64| {
        match dislike_store.increment_dislike(id) {
            Ok(()) => {
                reviews.set(load(&dislike_store));
                toasts.success("Спасибо за вашу оценку!");
            }
            Err(err) => log!("[REVIEWS] dislike failed: {err}"),
        }
    };

    let visible = Signal::derive(move || sorted(reviews.get(), sort.get()));

    view! {
        <section class="page reviews-page">
            <div class="reviews-toolbar">
                <h3>{ "Отзывы пользователей" }</h3>
                <select on:change=move |e| set_sort.set(ReviewSort::parse(&event_target_value(&e)))>
                    <option value="newest" selected=move || sort.get() == ReviewSort::Newest>
                        { "Сначала новые" }
                    </option>
                    <option value="highest" selected=move || sort.get() == ReviewSort::Highest>
                        { "Сначала с высокой оценкой" }
                    </option>
                    <option value="lowest" selected=move || sort.get() == ReviewSort::Lowest>
                        { "Сначала с низкой оценкой" }
                    </option>
                </select>
            </div>

            <ReviewForm on_submit=Callback::new(on_submit) />
            <ReviewsList
                reviews=visible
                on_like=Callback::new(on_like)
                on_dislike=Callback::new(on_dislike)
            />
        </section>
    }
}
