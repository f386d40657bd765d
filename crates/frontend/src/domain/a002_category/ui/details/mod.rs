use contracts::domain::a002_category::aggregate::{Category, CategoryForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::domain::a002_category::api;
use crate::domain::a002_category::Categories;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::{CheckboxField, FileInput, SelectField, TextAreaField, TextField};
use crate::shared::form::{non_empty, FormBanner, FormState};
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
pub fn CategoryDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(CategoryForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Category>);
    let image = StoredValue::new_local(None::<File>);
    let parents = RwSignal::new(Vec::<(String, String)>::new());

    if let Some(id) = id.clone() {
        actions.load::<Categories>(id, loading, move |category| {
            state.reset(CategoryForm::from(&category));
            current.set(Some(category));
        });
    }

    let own_id = id.clone();
    let token = actions.token();
    spawn_local(async move {
        match api::category_options(&ApiClient::authorized(token.as_deref())).await {
            Ok(options) => {
                let mut list = vec![(String::new(), "None".to_string())];
                list.extend(
                    options
                        .into_iter()
                        .filter(|(option_id, _)| Some(option_id) != own_id.as_ref()),
                );
                parents.try_set(list);
            }
            Err(err) => actions.report(err),
        }
    });

    let title = {
        let is_new = id.is_none();
        Signal::derive(move || {
            if is_new {
                "New category".to_string()
            } else {
                current.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default())
            }
        })
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        let file = image.try_get_value().flatten();
        actions.submit(
            state,
            move |token, form| async move {
                api::save_category(&ApiClient::authorized(token.as_deref()), id.as_deref(), &form, file)
                    .await
            },
            move |_| on_close.run(()),
        );
    });

    view! {
        <DetailsFrame
            page_id="a002_category--detail"
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
                    get=|f: &CategoryForm| f.name.clone()
                    set=|f: &mut CategoryForm, v| f.name = v
                />
                <TextAreaField
                    state=state
                    field="description"
                    label="Description"
                    get=|f: &CategoryForm| f.description.clone()
                    set=|f: &mut CategoryForm, v| f.description = v
                />
                <SelectField
                    state=state
                    field="parent_id"
                    label="Parent category"
                    options=parents
                    get=|f: &CategoryForm| f.parent_id.clone().unwrap_or_default()
                    set=|f: &mut CategoryForm, v| f.parent_id = non_empty(v)
                />
                <CheckboxField
                    state=state
                    field="is_active"
                    label="Active"
                    get=|f: &CategoryForm| f.is_active
                    set=|f: &mut CategoryForm, v| f.is_active = v
                />
                {move || current.with(|c| {
                    c.as_ref().and_then(|c| c.image.clone()).map(|file| view! {
                        <img class="details-preview" src=static_url(&file) alt="category image" />
                    })
                })}
                <FileInput
                    label="Image"
                    on_select=Callback::new(move |files: Vec<File>| image.set_value(files.into_iter().next()))
                />
            </div>
        </DetailsFrame>
    }
}
