use contracts::system::user_profile::{ChangePasswordForm, ProfileForm, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use super::{api, session_user};
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::{FileInput, TextField};
use crate::shared::form::{FormBanner, FormState};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::resource::PageActions;
use crate::system::auth::context::use_session;

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let session = use_session();
    let actions = PageActions::new();

    let profile = RwSignal::new(UserProfile::default());
    let loading = RwSignal::new(true);
    let details = FormState::new(ProfileForm::default());
    let password = FormState::new(ChangePasswordForm::default());
    let avatar = StoredValue::new_local(None::<File>);

    let token = actions.token();
    spawn_local(async move {
        let result = api::fetch_profile(&ApiClient::authorized(token.as_deref())).await;
        loading.try_set(false);
        match result {
            Ok(loaded) => {
                details.reset(ProfileForm::from(&loaded));
                profile.try_set(loaded);
            }
            Err(err) => actions.report(err),
        }
    });

    let save_profile = move |_| {
        let file = avatar.try_get_value().flatten();
        actions.submit(
            details,
            move |token, form| async move {
                api::update_profile(&ApiClient::authorized(token.as_deref()), &form, file).await
            },
            move |response| {
                let updated = response.data;
                if !updated.id.is_empty() {
                    session.refresh_user(session_user(&updated));
                    profile.set(updated);
                }
                avatar.set_value(None);
            },
        );
    };

    let save_password = move |_| {
        actions.submit(
            password,
            |token, form| async move {
                api::change_password(&ApiClient::authorized(token.as_deref()), &form).await
            },
            move |_| password.reset(ChangePasswordForm::default()),
        );
    };

    let avatar_view = move || {
        profile.with(|p| match &p.avatar {
            Some(file) => view! { <img class="profile__avatar" src=static_url(file) alt="avatar" /> }.into_any(),
            None => {
                let initials = session
                    .user
                    .get()
                    .map(|u| u.initials())
                    .unwrap_or_default();
                view! { <div class="profile__avatar profile__avatar--placeholder">{initials}</div> }.into_any()
            }
        })
    };

    view! {
        <PageFrame page_id="sys_user_profile--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My profile"</h1>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get()>
                    <Flex justify=FlexJustify::Center>
                        <Spinner />
                    </Flex>
                </Show>

                <div class="profile">
                    <section class="profile__section">
                        <h2>"Details"</h2>
                        {avatar_view}
                        <div class="profile__role">{move || profile.with(|p| p.role.as_str().to_string())}</div>
                        <FormBanner state=details />
                        <TextField
                            state=details
                            field="name"
                            label="Name"
                            get=|f: &ProfileForm| f.name.clone()
                            set=|f: &mut ProfileForm, v| f.name = v
                        />
                        <TextField
                            state=details
                            field="email"
                            label="Email"
                            kind="email"
                            get=|f: &ProfileForm| f.email.clone()
                            set=|f: &mut ProfileForm, v| f.email = v
                        />
                        <TextField
                            state=details
                            field="phone"
                            label="Phone"
                            kind="tel"
                            get=|f: &ProfileForm| f.phone.clone()
                            set=|f: &mut ProfileForm, v| f.phone = v
                        />
                        <FileInput
                            label="New avatar"
                            on_select=Callback::new(move |files: Vec<File>| {
                                avatar.set_value(files.into_iter().next())
                            })
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=details.saving
                            on_click=save_profile
                        >
                            {icon("save")}
                            " Save profile"
                        </Button>
                    </section>

                    <section class="profile__section">
                        <h2>"Change password"</h2>
                        <FormBanner state=password />
                        <TextField
                            state=password
                            field="current_password"
                            label="Current password"
                            kind="password"
                            get=|f: &ChangePasswordForm| f.current_password.clone()
                            set=|f: &mut ChangePasswordForm, v| f.current_password = v
                        />
                        <TextField
                            state=password
                            field="new_password"
                            label="New password"
                            kind="password"
                            get=|f: &ChangePasswordForm| f.new_password.clone()
                            set=|f: &mut ChangePasswordForm, v| f.new_password = v
                        />
                        <TextField
                            state=password
                            field="confirm_password"
                            label="Confirm new password"
                            kind="password"
                            get=|f: &ChangePasswordForm| f.confirm_password.clone()
                            set=|f: &mut ChangePasswordForm, v| f.confirm_password = v
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=password.saving
                            on_click=save_password
                        >
                            "Change password"
                        </Button>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}
