use contracts::domain::a011_faq::aggregate::Faq;
use leptos::prelude::*;

use crate::domain::a011_faq::Faqs;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ActiveBadge;
use crate::shared::resource::{resource_list_view, use_resource_list, ListOptions, ListRow, Resource};

impl ListRow for Faq {
    fn columns() -> Vec<(&'static str, f32)> {
        vec![("#", 50.0), ("Question", 300.0), ("Answer", 320.0), ("Status", 100.0)]
    }

    fn cells(&self) -> Vec<AnyView> {
        vec![
            self.position.to_string().into_any(),
            self.question.clone().into_any(),
            self.answer.clone().into_any(),
            view! { <ActiveBadge active=self.is_active active_label="Visible" inactive_label="Hidden" /> }.into_any(),
        ]
    }
}

#[component]
pub fn FaqList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = use_resource_list::<Faqs>();

    let mut options =
        ListOptions::new("a011_faq--list", Faqs::TITLE).with_details::<Faqs>(ctx, "FAQ");
    options.create_label = "New question";
    options.search_fields = vec![("question", "Question")];
    options.deletable = true;

    resource_list_view(state, options)
}
