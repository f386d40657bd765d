pub mod api;
pub mod ui;

use contracts::domain::a011_faq::aggregate::Faq;

use crate::shared::resource::Resource;

pub struct Faqs;

impl Resource for Faqs {
    type Item = Faq;

    const PATH: &'static str = "faq";
    const TAB_KEY: &'static str = "a011_faq";
    const TITLE: &'static str = "FAQ";

    fn item_id(item: &Faq) -> String {
        item.id.clone()
    }
}
