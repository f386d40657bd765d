pub mod api;
pub mod ui;

use contracts::domain::a015_inquiry::aggregate::Inquiry;

use crate::shared::resource::Resource;

pub struct Inquiries;

impl Resource for Inquiries {
    type Item = Inquiry;

    const PATH: &'static str = "inquiry";
    const TAB_KEY: &'static str = "a015_inquiry";
    const TITLE: &'static str = "Inquiries";

    fn item_id(item: &Inquiry) -> String {
        item.id.clone()
    }
}
