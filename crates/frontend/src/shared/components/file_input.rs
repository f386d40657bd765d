use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// Files currently picked in an `<input type="file">`.
pub fn selected_files(ev: &leptos::ev::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn FileInput(
    label: &'static str,
    #[prop(optional)] multiple: bool,
    #[prop(default = "image/*")] accept: &'static str,
    on_select: Callback<Vec<File>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="file"
                class="form__file"
                accept=accept
                multiple=multiple
                on:change=move |ev| on_select.run(selected_files(&ev))
            />
        </div>
    }
}
