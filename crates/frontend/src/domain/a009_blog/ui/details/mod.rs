use contracts::domain::a009_blog::aggregate::{BlogPost, BlogPostForm};
use contracts::domain::common::{parse_tags, slugify};
use leptos::prelude::*;
use web_sys::File;

use crate::domain::a009_blog::api;
use crate::domain::a009_blog::BlogPosts;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::{CheckboxField, FileInput, TextAreaField, TextField};
use crate::shared::form::{FormBanner, FormState};
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
pub fn BlogPostDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(BlogPostForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<BlogPost>);
    let banner = StoredValue::new_local(None::<File>);
    // edited as free text, split into tags on save
    let tags_text = RwSignal::new(String::new());

    if let Some(id) = id.clone() {
        actions.load::<BlogPosts>(id, loading, move |post| {
            tags_text.set(post.tags.join(", "));
            state.reset(BlogPostForm::from(&post));
            current.set(Some(post));
        });
    }

    let title = {
        let is_new = id.is_none();
        Signal::derive(move || {
            if is_new {
                "New post".to_string()
            } else {
                current.with(|p| p.as_ref().map(|p| p.title.clone()).unwrap_or_default())
            }
        })
    };

    let slug_preview = move || {
        let slug = state.form.with(|f| slugify(&f.title));
        (!slug.is_empty()).then(|| view! { <div class="form__hint">{format!("/blog/{}", slug)}</div> })
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        let file = banner.try_get_value().flatten();
        let tags = parse_tags(&tags_text.get_untracked());
        state.form.update(|f| f.tags = tags);
        actions.submit(
            state,
            move |token, form| async move {
                api::save_post(&ApiClient::authorized(token.as_deref()), id.as_deref(), &form, file)
                    .await
            },
            move |_| on_close.run(()),
        );
    });

    view! {
        <DetailsFrame
            page_id="a009_blog--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            <div class="details-form details-form--wide">
                <FormBanner state=state />
                <TextField
                    state=state
                    field="title"
                    label="Title"
                    get=|f: &BlogPostForm| f.title.clone()
                    set=|f: &mut BlogPostForm, v| f.title = v
                />
                {slug_preview}
                <TextAreaField
                    state=state
                    field="excerpt"
                    label="Excerpt"
                    rows=3
                    get=|f: &BlogPostForm| f.excerpt.clone()
                    set=|f: &mut BlogPostForm, v| f.excerpt = v
                />
                <TextAreaField
                    state=state
                    field="content"
                    label="Content"
                    rows=14
                    get=|f: &BlogPostForm| f.content.clone()
                    set=|f: &mut BlogPostForm, v| f.content = v
                />
                <div class="form__group">
                    <label class="form__label" for="tags">"Tags"</label>
                    <input
                        id="tags"
                        class="form__input"
                        placeholder="news, release, howto"
                        prop:value=move || tags_text.get()
                        on:input=move |ev| tags_text.set(event_target_value(&ev))
                    />
                </div>
                <CheckboxField
                    state=state
                    field="is_published"
                    label="Published"
                    get=|f: &BlogPostForm| f.is_published
                    set=|f: &mut BlogPostForm, v| f.is_published = v
                />
                {move || current.with(|p| {
                    p.as_ref().and_then(|p| p.banner.clone()).map(|file| view! {
                        <img class="details-preview details-preview--wide" src=static_url(&file) alt="banner" />
                    })
                })}
                <FileInput
                    label="Banner"
                    on_select=Callback::new(move |files: Vec<File>| banner.set_value(files.into_iter().next()))
                />
            </div>
        </DetailsFrame>
    }
}
