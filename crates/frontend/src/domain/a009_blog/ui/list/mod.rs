use contracts::domain::a009_blog::aggregate::BlogPost;
use leptos::prelude::*;

use crate::domain::a009_blog::BlogPosts;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::static_url;
use crate::shared::components::{Badge, BadgeVariant};
use crate::shared::format::format_opt_date;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for BlogPost {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Banner", 90.0),
            ("Title", 260.0),
            ("Tags", 180.0),
            ("Status", 100.0),
            ("Created", 110.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let banner = match &self.banner {
            Some(file) => view! { <img class="list-thumb" src=static_url(file) alt="" /> }.into_any(),
            None => "-".into_any(),
        };
        let status = if self.is_published {
            view! { <Badge variant=BadgeVariant::Success>"Published"</Badge> }.into_any()
        } else {
            view! { <Badge variant=BadgeVariant::Warning>"Draft"</Badge> }.into_any()
        };
        vec![
            banner,
            self.title.clone().into_any(),
            self.tags.join(", ").into_any(),
            status,
            format_opt_date(self.created_at.as_deref()).into_any(),
        ]
    }
}

#[component]
pub fn BlogPostList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<BlogPosts>();

    let mut options = ListOptions::new("a009_blog--list", BlogPosts::TITLE)
        .with_details::<BlogPosts>(ctx, "Post");
    options.create_label = "New post";
    options.search_fields = vec![("title", "Title"), ("tags", "Tag")];
    options.filters = vec![FilterSpec::new("isPublished", "Status")
        .option("true", "Published")
        .option("false", "Draft")];
    options.deletable = true;

    resource_list_view(state, options)
}
