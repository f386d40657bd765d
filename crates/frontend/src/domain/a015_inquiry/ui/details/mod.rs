use contracts::domain::a015_inquiry::aggregate::{Inquiry, InquiryReplyForm, InquiryStatus};
use leptos::prelude::*;

use super::list::inquiry_badge;
use crate::domain::a015_inquiry::api;
use crate::domain::a015_inquiry::Inquiries;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::{enum_options, SelectField, TextAreaField};
use crate::shared::form::{FormBanner, FormState};
use crate::shared::format::format_datetime;
use crate::shared::resource::{DetailsFrame, PageActions};

/// A fresh inquiry is usually answered and closed in one go.
fn reply_form(inquiry: &Inquiry) -> InquiryReplyForm {
    let status = match inquiry.status {
        InquiryStatus::New => InquiryStatus::Resolved,
        other => other,
    };
    InquiryReplyForm {
        message: String::new(),
        status,
    }
}

#[component]
pub fn InquiryDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(InquiryReplyForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Inquiry>);

    let reset_from = move |inquiry: Inquiry| {
        state.reset(reply_form(&inquiry));
        current.set(Some(inquiry));
    };

    actions.load::<Inquiries>(id.clone(), loading, reset_from);

    let title = Signal::derive(move || {
        current.with(|q| {
            q.as_ref()
                .map(|q| format!("Inquiry from {}", q.name))
                .unwrap_or_else(|| "Inquiry".to_string())
        })
    });

    let save = Callback::new(move |_| {
        let id = id.clone();
        actions.submit(
            state,
            move |token, form| async move {
                api::reply(&ApiClient::authorized(token.as_deref()), &id, &form).await
            },
            move |response| {
                if !response.data.id.is_empty() {
                    reset_from(response.data);
                }
            },
        );
    });

    let status_options = Signal::derive(|| {
        enum_options(&InquiryStatus::ALL, InquiryStatus::as_str, InquiryStatus::label)
    });

    let message = move || {
        current.get().map(|q| {
            let received = q.created_at.as_deref().map(format_datetime).unwrap_or_default();
            let attachment = q.attachment.clone().filter(|a| !a.is_empty()).map(|file| {
                let href = static_url(&file);
                view! {
                    <a class="inquiry__attachment" href=href target="_blank" rel="noopener">
                        {format!("Attachment: {}", file)}
                    </a>
                }
            });
            view! {
                <div class="inquiry">
                    <div class="inquiry__header">
                        <strong>{q.name.clone()}</strong>
                        <a href=format!("mailto:{}", q.email)>{q.email.clone()}</a>
                        <span>{q.phone.clone().unwrap_or_default()}</span>
                        {inquiry_badge(q.status)}
                        <span class="inquiry__date">{received}</span>
                    </div>
                    <h3>{q.subject.clone()}</h3>
                    <p class="pre-wrap">{q.message.clone()}</p>
                    {attachment}
                </div>
            }
        })
    };

    view! {
        <DetailsFrame
            page_id="a015_inquiry--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            {message}
            <div class="details-form">
                <FormBanner state=state />
                <TextAreaField
                    state=state
                    field="message"
                    label="Reply"
                    rows=8
                    get=|f: &InquiryReplyForm| f.message.clone()
                    set=|f: &mut InquiryReplyForm, v: String| f.message = v
                />
                <SelectField
                    state=state
                    field="status"
                    label="Status after reply"
                    options=status_options
                    get=|f: &InquiryReplyForm| f.status.as_str().to_string()
                    set=|f: &mut InquiryReplyForm, v: String| {
                        if let Some(status) = InquiryStatus::parse(&v) {
                            f.status = status;
                        }
                    }
                />
            </div>
        </DetailsFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_inquiry_defaults_to_resolving() {
        let inquiry = Inquiry {
            status: InquiryStatus::New,
            ..Default::default()
        };
        assert_eq!(reply_form(&inquiry).status, InquiryStatus::Resolved);

        let ongoing = Inquiry {
            status: InquiryStatus::InProgress,
            ..Default::default()
        };
        assert_eq!(reply_form(&ongoing).status, InquiryStatus::InProgress);
        assert!(reply_form(&ongoing).message.is_empty());
    }
}
