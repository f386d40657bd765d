use contracts::domain::a013_product_review::aggregate::{ProductReview, ReviewModerationForm};
use leptos::prelude::*;

use crate::domain::a013_product_review::api;
use crate::domain::a013_product_review::Reviews;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{CheckboxField, TextAreaField};
use crate::shared::form::{FormBanner, FormState};
use crate::shared::format::format_opt_date;
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
pub fn ReviewDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(ReviewModerationForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<ProductReview>);

    actions.load::<Reviews>(id.clone(), loading, move |review| {
        state.reset(ReviewModerationForm::from(&review));
        current.set(Some(review));
    });

    let title = Signal::derive(move || {
        current.with(|r| {
            r.as_ref()
                .map(|r| format!("Review of {}", r.product_name))
                .unwrap_or_else(|| "Review".to_string())
        })
    });

    let save = Callback::new(move |_| {
        let id = id.clone();
        actions.submit(
            state,
            move |token, form| async move {
                api::moderate(&ApiClient::authorized(token.as_deref()), &id, &form).await
            },
            move |_| on_close.run(()),
        );
    });

    view! {
        <DetailsFrame
            page_id="a013_product_review--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            {move || current.get().map(|review| view! {
                <blockquote class="review">
                    <div class="review__header">
                        <span class="stars">{review.stars()}</span>
                        <strong>{review.customer_name.clone()}</strong>
                        <span class="review__date">{format_opt_date(review.created_at.as_deref())}</span>
                    </div>
                    <p class="pre-wrap">{review.comment.clone()}</p>
                </blockquote>
            })}
            <div class="details-form">
                <FormBanner state=state />
                <CheckboxField
                    state=state
                    field="is_approved"
                    label="Approved (visible on the product page)"
                    get=|f: &ReviewModerationForm| f.is_approved
                    set=|f: &mut ReviewModerationForm, v| f.is_approved = v
                />
                <TextAreaField
                    state=state
                    field="reply"
                    label="Public reply"
                    get=|f: &ReviewModerationForm| f.reply.clone().unwrap_or_default()
                    set=|f: &mut ReviewModerationForm, v: String| f.reply = Some(v)
                />
            </div>
        </DetailsFrame>
    }
}
