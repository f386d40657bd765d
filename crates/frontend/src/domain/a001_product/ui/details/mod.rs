mod variations;

use contracts::domain::a001_product::{Product, ProductDraft, ProductForm, ProductStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use crate::domain::a001_product::api;
use crate::domain::a001_product::Products;
use crate::domain::a002_category::api::category_options;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::{enum_options, FileInput, SelectField, TextAreaField, TextField};
use crate::shared::form::{non_empty, parse_number, FormBanner, FormState};
use crate::shared::icons::icon;
use crate::shared::resource::{DetailsFrame, PageActions};

use variations::VariationsEditor;

#[component]
pub fn ProductDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(ProductForm::default());
    let draft = RwSignal::new(ProductDraft::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Product>);
    let new_images = StoredValue::new_local(Vec::<File>::new());
    let new_image_count = RwSignal::new(0usize);
    let categories = RwSignal::new(Vec::<(String, String)>::new());

    if let Some(id) = id.clone() {
        actions.load::<Products>(id, loading, move |product| {
            let form = ProductForm::from(&product);
            draft.set(ProductDraft::new(form.variations.clone(), form.variants.clone()));
            state.reset(form);
            current.set(Some(product));
        });
    }

    let token = actions.token();
    spawn_local(async move {
        match category_options(&ApiClient::authorized(token.as_deref())).await {
            Ok(options) => {
                let mut list = vec![(String::new(), "Select a category".to_string())];
                list.extend(options);
                categories.try_set(list);
            }
            Err(err) => actions.report(err),
        }
    });

    let title = {
        let is_new = id.is_none();
        Signal::derive(move || {
            if is_new {
                "New product".to_string()
            } else {
                current.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())
            }
        })
    };

    let base_price = Signal::derive(move || {
        state.form.with(|f| match f.discount_price {
            Some(discount) if discount > 0.0 => discount,
            _ => f.price,
        })
    });

    let remove_image = move |file: String| {
        state.form.update(|f| f.existing_images.retain(|img| img != &file));
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        draft.with_untracked(|d| {
            state.form.update(|f| {
                f.variations = d.variations.clone();
                f.variants = d.variants.clone();
            })
        });
        let files = new_images.try_get_value().unwrap_or_default();
        actions.submit(
            state,
            move |token, form| async move {
                api::save_product(&ApiClient::authorized(token.as_deref()), id.as_deref(), &form, files)
                    .await
            },
            move |_| on_close.run(()),
        );
    });

    let status_options = Signal::derive(|| {
        enum_options(&ProductStatus::ALL, ProductStatus::as_str, ProductStatus::label)
    });

    view! {
        <DetailsFrame
            page_id="a001_product--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            <div class="details-form details-form--wide">
                <FormBanner state=state />
                <div class="details-form__grid">
                    <TextField
                        state=state
                        field="name"
                        label="Name"
                        get=|f: &ProductForm| f.name.clone()
                        set=|f: &mut ProductForm, v| f.name = v
                    />
                    <TextField
                        state=state
                        field="sku"
                        label="SKU"
                        get=|f: &ProductForm| f.sku.clone()
                        set=|f: &mut ProductForm, v| f.sku = v
                    />
                    <TextField
                        state=state
                        field="price"
                        label="Price"
                        kind="number"
                        get=|f: &ProductForm| f.price.to_string()
                        set=|f: &mut ProductForm, v: String| f.price = parse_number(&v)
                    />
                    <TextField
                        state=state
                        field="discount_price"
                        label="Discount price"
                        kind="number"
                        placeholder="No discount"
                        get=|f: &ProductForm| f.discount_price.map(|p| p.to_string()).unwrap_or_default()
                        set=|f: &mut ProductForm, v: String| {
                            f.discount_price = non_empty(v).map(|p| parse_number(&p))
                        }
                    />
                    <TextField
                        state=state
                        field="stock"
                        label="Stock"
                        kind="number"
                        get=|f: &ProductForm| f.stock.to_string()
                        set=|f: &mut ProductForm, v: String| f.stock = parse_number(&v)
                    />
                    <SelectField
                        state=state
                        field="category_id"
                        label="Category"
                        options=categories
                        get=|f: &ProductForm| f.category_id.clone()
                        set=|f: &mut ProductForm, v| f.category_id = v
                    />
                    <SelectField
                        state=state
                        field="status"
                        label="Status"
                        options=status_options
                        get=|f: &ProductForm| f.status.as_str().to_string()
                        set=|f: &mut ProductForm, v: String| {
                            if let Some(status) = ProductStatus::parse(&v) {
                                f.status = status;
                            }
                        }
                    />
                </div>
                <TextAreaField
                    state=state
                    field="description"
                    label="Description"
                    rows=6
                    get=|f: &ProductForm| f.description.clone()
                    set=|f: &mut ProductForm, v| f.description = v
                />

                <section class="gallery">
                    <h3>"Images"</h3>
                    <div class="gallery__grid">
                        <For
                            each=move || state.form.with(|f| f.existing_images.clone())
                            key=|file| file.clone()
                            children=move |file| {
                                let target = file.clone();
                                view! {
                                    <div class="gallery__item">
                                        <img src=static_url(&file) alt="" />
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| remove_image(target.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <FileInput
                        label="Add images"
                        multiple=true
                        on_select=Callback::new(move |files: Vec<File>| {
                            let count = files.len();
                            new_images.set_value(files);
                            new_image_count.set(count);
                        })
                    />
                    {move || match new_image_count.get() {
                        0 => None,
                        n => Some(view! { <div class="form__hint">{format!("{} new image(s) will be uploaded", n)}</div> }),
                    }}
                </section>

                <VariationsEditor draft=draft base_price=base_price />
            </div>
        </DetailsFrame>
    }
}
