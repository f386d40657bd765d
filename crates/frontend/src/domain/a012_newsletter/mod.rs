pub mod api;
pub mod ui;

use contracts::domain::a012_newsletter::aggregate::Subscriber;

use crate::shared::export::Exportable;
use crate::shared::format::format_opt_date;
use crate::shared::resource::Resource;

pub struct Subscribers;

impl Resource for Subscribers {
    type Item = Subscriber;

    const PATH: &'static str = "newsletter";
    const TAB_KEY: &'static str = "a012_newsletter";
    const TITLE: &'static str = "Newsletter";

    fn item_id(item: &Subscriber) -> String {
        item.id.clone()
    }
}

impl Exportable for Subscriber {
    fn headers() -> Vec<&'static str> {
        vec!["Email", "Status", "Subscribed"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            if self.is_active { "Active" } else { "Unsubscribed" }.to_string(),
            format_opt_date(self.subscribed_at.as_deref()),
        ]
    }
}
