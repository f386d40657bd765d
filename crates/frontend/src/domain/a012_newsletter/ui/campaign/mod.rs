use contracts::domain::a012_newsletter::aggregate::NewsletterCampaignForm;
use leptos::prelude::*;

use crate::domain::a012_newsletter::api;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::form::{FormBanner, FormState};
use crate::shared::resource::{confirm, DetailsFrame, PageActions};

/// Composer for a mail-out to all active subscribers.
#[component]
pub fn NewsletterCampaign(on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(NewsletterCampaignForm::default());

    let send = Callback::new(move |_| {
        if !confirm("Send this newsletter to every active subscriber?") {
            return;
        }
        actions.submit(
            state,
            move |token, form| async move {
                api::send_campaign(&ApiClient::authorized(token.as_deref()), &form).await
            },
            move |response| {
                log::info!("newsletter sent to {} recipients", response.data.recipients);
                on_close.run(())
            },
        );
    });

    view! {
        <DetailsFrame
            page_id="a012_newsletter--detail"
            title=Signal::stored("New newsletter".to_string())
            saving=state.saving
            on_save=send
            on_close=on_close
        >
            <div class="details-form details-form--wide">
                <FormBanner state=state />
                <TextField
                    state=state
                    field="subject"
                    label="Subject"
                    get=|f: &NewsletterCampaignForm| f.subject.clone()
                    set=|f: &mut NewsletterCampaignForm, v| f.subject = v
                />
                <TextAreaField
                    state=state
                    field="body"
                    label="Message"
                    rows=14
                    get=|f: &NewsletterCampaignForm| f.body.clone()
                    set=|f: &mut NewsletterCampaignForm, v| f.body = v
                />
            </div>
        </DetailsFrame>
    }
}
