use leptos::*;
use thiserror::Error;

use crate::components::toast::Toasts;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReviewFormError {
    #[error("Пожалуйста, поставьте оценку")]
    NoRating,
    #[error("Отзыв должен содержать минимум 10 символов")]
    TextTooShort,
}

/// Submission-time validation: a rating must be picked and the text must be
/// at least 10 characters. This is the only place the rules are enforced;
/// stored content is never re-validated on read.
pub fn validate_review(rating: u8, text: &str) -> Result<(), ReviewFormError> {
    if rating == 0 {
        return Err(ReviewFormError::NoRating);
    }
    if text.trim().chars().count() < 10 {
        return Err(ReviewFormError::TextTooShort);
    }
    Ok(())
}

#[component]
pub fn ReviewForm(#[prop(into)] on_submit: Callback<(u8, String)>) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let (rating, set_rating) = create_signal(0u8);
    let (text, set_text) = create_signal(String::new());

    let submit = move |_| {
        let value = text.get().trim().to_string();
        match validate_review(rating.get(), &value) {
            Err(err) => toasts.error(err.to_string()),
            Ok(()) => {
                on_submit.call((rating.get(), value));
                // Reset the form for the next review.
                set_rating.set(0);
                set_text.set(String::new());
            }
        }
    };

    view! {
        <div class="review-form">
            <h3>{ "Оставить отзыв" }</h3>
            <div class="stars-input">
                {(1u8..=5).map(|star| view! {
                    <i
                        class=move || { if rating.get() >= star { "fas fa-star active" } else { "far fa-star" } }
                        on:click=move |_| set_rating.set(star)
                    ></i>
                }).collect::<Vec<_>>()}
            </div>
            <textarea
                placeholder="Расскажите о вашем опыте"
                prop:value=text
                on:input=move |e| set_text.set(event_target_value(&e))
            ></textarea>
            <button class="btn-primary" on:click=submit>
                { "Отправить отзыв" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rating_is_rejected() {
        assert_eq!(
            validate_review(0, "Достаточно длинный отзыв"),
            Err(ReviewFormError::NoRating)
        );
    }

    #[test]
    fn short_text_is_rejected() {
        assert_eq!(validate_review(5, "Коротко"), Err(ReviewFormError::TextTooShort));
        // Whitespace padding does not count toward the minimum.
        assert_eq!(
            validate_review(5, "    да    "),
            Err(ReviewFormError::TextTooShort)
        );
    }

    #[test]
    fn ten_characters_pass() {
        // Cyrillic characters count as characters, not bytes.
        assert_eq!(validate_review(4, "Десять букв"), Ok(()));
        assert_eq!(validate_review(1, "exactly 10"), Ok(()));
    }
}
