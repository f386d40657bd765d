use contracts::domain::a006_courier::aggregate::{Courier, CourierForm};
use leptos::prelude::*;

use crate::domain::a006_courier::api;
use crate::domain::a006_courier::Couriers;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{CheckboxField, TextField};
use crate::shared::form::{non_empty, FormBanner, FormState};
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
pub fn CourierDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(CourierForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Courier>);

    if let Some(id) = id.clone() {
        actions.load::<Couriers>(id, loading, move |courier| {
            state.reset(CourierForm::from(&courier));
            current.set(Some(courier));
        });
    }

    let title = {
        let is_new = id.is_none();
        Signal::derive(move || {
            if is_new {
                "New courier".to_string()
            } else {
                current.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default())
            }
        })
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        actions.submit(
            state,
            move |token, form| async move {
                api::save_courier(&ApiClient::authorized(token.as_deref()), id.as_deref(), &form).await
            },
            move |_| on_close.run(()),
        );
    });

    view! {
        <DetailsFrame
            page_id="a006_courier--detail"
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
                    field="name"
                    label="Name"
                    get=|f: &CourierForm| f.name.clone()
                    set=|f: &mut CourierForm, v| f.name = v
                />
                <TextField
                    state=state
                    field="phone"
                    label="Phone"
                    kind="tel"
                    get=|f: &CourierForm| f.phone.clone()
                    set=|f: &mut CourierForm, v| f.phone = v
                />
                <TextField
                    state=state
                    field="email"
                    label="Email"
                    kind="email"
                    get=|f: &CourierForm| f.email.clone().unwrap_or_default()
                    set=|f: &mut CourierForm, v| f.email = non_empty(v)
                />
                <TextField
                    state=state
                    field="tracking_url"
                    label="Tracking URL"
                    placeholder="https://carrier.example/track?n={tracking}"
                    get=|f: &CourierForm| f.tracking_url.clone().unwrap_or_default()
                    set=|f: &mut CourierForm, v| f.tracking_url = non_empty(v)
                />
                <CheckboxField
                    state=state
                    field="is_active"
                    label="Active"
                    get=|f: &CourierForm| f.is_active
                    set=|f: &mut CourierForm, v| f.is_active = v
                />
            </div>
        </DetailsFrame>
    }
}
