pub mod api;
pub mod ui;

use contracts::domain::a001_product::Product;

use crate::shared::resource::Resource;

pub struct Products;

impl Resource for Products {
    type Item = Product;

    const PATH: &'static str = "product";
    const TAB_KEY: &'static str = "a001_product";
    const TITLE: &'static str = "Products";

    fn item_id(item: &Product) -> String {
        item.id.clone()
    }
}
