use contracts::domain::a008_media::aggregate::{human_size, MediaFile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

use crate::domain::a008_media::api::{upload_media, zip_entries};
use crate::domain::a008_media::MediaLibrary;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::static_url;
use crate::shared::components::FileInput;
use crate::shared::export::download_zip;
use crate::shared::format::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::resource::{
    resource_list_view, success_message, use_resource_list, ListOptions, ListRow, PageActions,
    Resource,
};

impl ListRow for MediaFile {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Preview", 90.0),
            ("Name", 240.0),
            ("Type", 120.0),
            ("Size", 90.0),
            ("Uploaded", 110.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let url = static_url(&self.filename);
        let preview = if self.is_image() {
            view! { <img class="list-thumb" src=url.clone() alt="" /> }.into_any()
        } else {
            view! { <span class="file-icon">{icon("media")}</span> }.into_any()
        };
        vec![
            preview,
            view! {
                <a class="link" href=url target="_blank" rel="noopener">{self.display_name().to_string()}</a>
            }
            .into_any(),
            self.mime_type.clone().into_any(),
            human_size(self.size).into_any(),
            format_opt_date(self.created_at.as_deref()).into_any(),
        ]
    }
}

#[component]
pub fn MediaLibraryPage() -> impl IntoView {
    let state = use_resource_list::<MediaLibrary>();
    let actions = PageActions::new();
    let uploading = RwSignal::new(false);
    let zipping = RwSignal::new(false);

    let upload = Callback::new(move |files: Vec<File>| {
        if files.is_empty() || uploading.get_untracked() {
            return;
        }
        uploading.set(true);
        let token = actions.token();
        spawn_local(async move {
            let result = upload_media(&ApiClient::authorized(token.as_deref()), files).await;
            uploading.try_set(false);
            match result {
                Ok(response) => {
                    let fallback = format!("{} file(s) uploaded", response.data.len());
                    actions
                        .notifier()
                        .success(success_message(&response.message, &fallback));
                    state.reload();
                }
                Err(err) => actions.report(err),
            }
        });
    });

    let download_page = move |_| {
        let entries = state.items.with_untracked(|items| zip_entries(items, static_url));
        if entries.is_empty() {
            actions.notifier().info("Nothing to download on this page");
            return;
        }
        zipping.set(true);
        spawn_local(async move {
            let result = download_zip(entries, "media.zip").await;
            zipping.try_set(false);
            match result {
                Ok(count) => actions.notifier().success(format!("{} file(s) archived", count)),
                Err(message) => actions.notifier().error(message),
            }
        });
    };

    let mut options = ListOptions::new("a008_media--list", MediaLibrary::TITLE);
    options.search_fields = vec![("originalName", "Name")];
    options.deletable = true;
    options.toolbar = Some(ViewFn::from(move || {
        view! {
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <FileInput label="Upload" multiple=true accept="*/*" on_select=upload />
                {move || uploading.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || zipping.get())
                    on_click=download_page
                >
                    {icon("download")}
                    " Download ZIP"
                </Button>
            </Flex>
        }
    }));

    resource_list_view(state, options)
}
