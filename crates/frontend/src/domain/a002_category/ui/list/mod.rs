use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

use crate::domain::a002_category::Categories;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::static_url;
use crate::shared::components::ActiveBadge;
use crate::shared::resource::{
    resource_list_view, use_resource_list, FilterSpec, ListOptions, ListRow, Resource,
};

impl ListRow for Category {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![
            ("Image", 70.0),
            ("Name", 200.0),
            ("Slug", 160.0),
            ("Products", 90.0),
            ("Status", 100.0),
        ]
    }

    fn cells(&self) -> Vec<AnyView> {
        let image = match &self.image {
            Some(file) => view! { <img class="list-thumb" src=static_url(file) alt="" /> }.into_any(),
            None => "-".into_any(),
        };
        vec![
            image,
            self.name.clone().into_any(),
            self.slug.clone().into_any(),
            self.product_count.to_string().into_any(),
            view! { <ActiveBadge active=self.is_active /> }.into_any(),
        ]
    }
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Categories>();

    let mut options = ListOptions::new("a002_category--list", Categories::TITLE)
        .with_details::<Categories>(ctx, "Category");
    options.create_label = "New category";
    options.search_fields = vec![("name", "Name")];
    options.filters = vec![FilterSpec::new("isActive", "Status")
        .option("true", "Active")
        .option("false", "Inactive")];
    options.deletable = true;

    resource_list_view(state, options)
}
