use contracts::domain::a011_faq::aggregate::{Faq, FaqForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a011_faq::api;
use crate::domain::a011_faq::Faqs;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{CheckboxField, TextAreaField, TextField};
use crate::shared::form::{parse_number, FormBanner, FormState};
use crate::shared::query::ListQuery;
use crate::shared::resource::{DetailsFrame, PageActions, ResourceService};

#[component]
pub fn FaqDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(FaqForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Faq>);

    match id.clone() {
        Some(id) => actions.load::<Faqs>(id, loading, move |faq| {
            state.reset(FaqForm::from(&faq));
            current.set(Some(faq));
        }),
        None => {
            let token = actions.token();
            spawn_local(async move {
                let query = ListQuery::new(1, 1000);
                if let Ok(page) = ResourceService::<Faqs>::browser(token.as_deref())
                    .fetch_all(&query, None)
                    .await
                {
                    let position = api::next_position(&page.items);
                    state.form.try_update(|f| f.position = position);
                }
            });
        }
    }

    let title = {
        let is_new = id.is_none();
        Signal::derive(move || {
            if is_new {
                "New question".to_string()
            } else {
                current.with(|f| f.as_ref().map(|f| f.question.clone()).unwrap_or_default())
            }
        })
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        actions.submit(
            state,
            move |token, form| async move {
                api::save_faq(&ApiClient::authorized(token.as_deref()), id.as_deref(), &form).await
            },
            move |_| on_close.run(()),
        );
    });

    view! {
        <DetailsFrame
            page_id="a011_faq--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            <div class="details-form">
                <FormBanner state=state />
                <TextField
                    state=state
                    field="question"
                    label="Question"
                    get=|f: &FaqForm| f.question.clone()
                    set=|f: &mut FaqForm, v| f.question = v
                />
                <TextAreaField
                    state=state
                    field="answer"
                    label="Answer"
                    rows=6
                    get=|f: &FaqForm| f.answer.clone()
                    set=|f: &mut FaqForm, v| f.answer = v
                />
                <TextField
                    state=state
                    field="position"
                    label="Position"
                    kind="number"
                    get=|f: &FaqForm| f.position.to_string()
                    set=|f: &mut FaqForm, v: String| f.position = parse_number(&v)
                />
                <CheckboxField
                    state=state
                    field="is_active"
                    label="Visible on the storefront"
                    get=|f: &FaqForm| f.is_active
                    set=|f: &mut FaqForm, v| f.is_active = v
                />
            </div>
        </DetailsFrame>
    }
}
