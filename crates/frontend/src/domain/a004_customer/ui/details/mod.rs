use contracts::domain::a004_customer::aggregate::{Customer, CustomerStatusForm};
use leptos::prelude::*;

use crate::domain::a004_customer::api;
use crate::domain::a004_customer::Customers;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::{Badge, BadgeVariant, CheckboxField, TextAreaField};
use crate::shared::form::{FormBanner, FormState};
use crate::shared::format::format_opt_date;
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
pub fn CustomerDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(CustomerStatusForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Customer>);

    let reset_from = move |customer: Customer| {
        state.reset(CustomerStatusForm {
            is_blocked: customer.is_blocked,
            reason: String::new(),
        });
        current.set(Some(customer));
    };

    actions.load::<Customers>(id.clone(), loading, reset_from);

    let title = Signal::derive(move || {
        current.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_else(|| "Customer".into()))
    });

    let save = Callback::new(move |_| {
        let id = id.clone();
        actions.submit(
            state,
            move |token, form| async move {
                api::set_status(&ApiClient::authorized(token.as_deref()), &id, &form).await
            },
            move |response| {
                if !response.data.id.is_empty() {
                    reset_from(response.data);
                }
            },
        );
    });

    let profile = move || {
        current.get().map(|c| {
            let avatar = c.avatar.as_deref().map(static_url);
            view! {
                <div class="profile-card">
                    {avatar.map(|src| view! { <img class="avatar avatar--large" src=src alt="" /> })}
                    <div class="profile-card__body">
                        <h2>{c.name.clone()}</h2>
                        <div>{c.email.clone()}</div>
                        <div>{c.phone.clone().unwrap_or_default()}</div>
                        <div class="pre-wrap">{c.address.clone().unwrap_or_default()}</div>
                        <div>{format!("{} orders, joined {}", c.order_count, format_opt_date(c.created_at.as_deref()))}</div>
                        {if c.is_blocked {
                            view! { <Badge variant=BadgeVariant::Error>"Blocked"</Badge> }.into_any()
                        } else {
                            view! { <Badge variant=BadgeVariant::Success>"Active"</Badge> }.into_any()
                        }}
                    </div>
                </div>
            }
        })
    };

    view! {
        <DetailsFrame
            page_id="a004_customer--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            {profile}
            <div class="details-form">
                <h3>"Account access"</h3>
                <FormBanner state=state />
                <CheckboxField
                    state=state
                    field="is_blocked"
                    label="Blocked"
                    get=|f: &CustomerStatusForm| f.is_blocked
                    set=|f: &mut CustomerStatusForm, v| f.is_blocked = v
                />
                <TextAreaField
                    state=state
                    field="reason"
                    label="Reason"
                    rows=3
                    get=|f: &CustomerStatusForm| f.reason.clone()
                    set=|f: &mut CustomerStatusForm, v| f.reason = v
                />
            </div>
        </DetailsFrame>
    }
}
