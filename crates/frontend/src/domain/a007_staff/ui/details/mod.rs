use contracts::domain::a007_staff::aggregate::{Staff, StaffForm, StaffRole};
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

use crate::domain::a007_staff::api;
use crate::domain::a007_staff::StaffMembers;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::{enum_options, CheckboxField, FileInput, SelectField, TextField};
use crate::shared::form::{FormBanner, FormState};
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
pub fn StaffDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let is_new = id.is_none();
    let state = FormState::new(StaffForm {
        is_active: true,
        is_new,
        ..Default::default()
    });
    let loading = RwSignal::new(false);
    let toggling = RwSignal::new(false);
    let current = RwSignal::new(None::<Staff>);
    let avatar = StoredValue::new_local(None::<File>);

    if let Some(id) = id.clone() {
        actions.load::<StaffMembers>(id, loading, move |staff| {
            state.reset(StaffForm::from(&staff));
            current.set(Some(staff));
        });
    }

    let title = Signal::derive(move || {
        if is_new {
            "New staff member".to_string()
        } else {
            current.with(|s| s.as_ref().map(|s| s.name.clone()).unwrap_or_default())
        }
    });

    let save_id = id.clone();
    let save = Callback::new(move |_| {
        let id = save_id.clone();
        let file = avatar.try_get_value().flatten();
        actions.submit(
            state,
            move |token, form| async move {
                api::save_staff(&ApiClient::authorized(token.as_deref()), id.as_deref(), &form, file)
                    .await
            },
            move |_| on_close.run(()),
        );
    });

    let toggle_active = move |_| {
        let Some(staff) = current.get_untracked() else {
            return;
        };
        let activate = !staff.is_active;
        actions.run(
            toggling,
            move |token| async move {
                api::set_active(&ApiClient::authorized(token.as_deref()), &staff.id, activate).await
            },
            move |response| {
                if !response.data.id.is_empty() {
                    state.update_field("is_active", |f| f.is_active = response.data.is_active);
                    current.set(Some(response.data));
                }
            },
        );
    };

    let role_options = Signal::derive(|| enum_options(&StaffRole::ALL, StaffRole::as_str, StaffRole::label));

    view! {
        <DetailsFrame
            page_id="a007_staff--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            <div class="details-form">
                <FormBanner state=state />
                {move || current.with(|s| {
                    s.as_ref().and_then(|s| s.avatar.clone()).map(|file| view! {
                        <img class="avatar avatar--large" src=static_url(&file) alt="" />
                    })
                })}
                <FileInput
                    label="Avatar"
                    on_select=Callback::new(move |files: Vec<File>| avatar.set_value(files.into_iter().next()))
                />
                <div class="details-form__grid">
                    <TextField
                        state=state
                        field="name"
                        label="Name"
                        get=|f: &StaffForm| f.name.clone()
                        set=|f: &mut StaffForm, v| f.name = v
                    />
                    <TextField
                        state=state
                        field="email"
                        label="Email"
                        kind="email"
                        get=|f: &StaffForm| f.email.clone()
                        set=|f: &mut StaffForm, v| f.email = v
                    />
                    <TextField
                        state=state
                        field="phone"
                        label="Phone"
                        kind="tel"
                        get=|f: &StaffForm| f.phone.clone()
                        set=|f: &mut StaffForm, v| f.phone = v
                    />
                    <SelectField
                        state=state
                        field="role"
                        label="Role"
                        options=role_options
                        get=|f: &StaffForm| f.role.as_str().to_string()
                        set=|f: &mut StaffForm, v: String| {
                            if let Some(role) = StaffRole::parse(&v) {
                                f.role = role;
                            }
                        }
                    />
                    <TextField
                        state=state
                        field="password"
                        label=if is_new { "Password" } else { "New password" }
                        kind="password"
                        placeholder=if is_new { "" } else { "Leave blank to keep the current one" }
                        get=|f: &StaffForm| f.password.clone().unwrap_or_default()
                        set=|f: &mut StaffForm, v: String| f.password = (!v.is_empty()).then_some(v)
                    />
                </div>
                {if is_new {
                    view! {
                        <CheckboxField
                            state=state
                            field="is_active"
                            label="Active"
                            get=|f: &StaffForm| f.is_active
                            set=|f: &mut StaffForm, v| f.is_active = v
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || toggling.get() || current.with(Option::is_none))
                            on_click=toggle_active
                        >
                            {move || {
                                if current.with(|s| s.as_ref().is_some_and(|s| s.is_active)) {
                                    "Deactivate account"
                                } else {
                                    "Activate account"
                                }
                            }}
                        </Button>
                    }
                    .into_any()
                }}
            </div>
        </DetailsFrame>
    }
}
