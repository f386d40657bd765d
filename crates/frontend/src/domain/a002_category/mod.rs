pub mod api;
pub mod ui;

use contracts::domain::a002_category::aggregate::Category;

use crate::shared::resource::Resource;

pub struct Categories;

impl Resource for Categories {
    type Item = Category;

    const PATH: &'static str = "category";
    const TAB_KEY: &'static str = "a002_category";
    const TITLE: &'static str = "Categories";

    fn item_id(item: &Category) -> String {
        item.id.clone()
    }
}
