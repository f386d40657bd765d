pub mod api;
pub mod ui;

use contracts::domain::a013_product_review::aggregate::ProductReview;

use crate::shared::resource::Resource;

pub struct Reviews;

impl Resource for Reviews {
    type Item = ProductReview;

    const PATH: &'static str = "product-review";
    const TAB_KEY: &'static str = "a013_product_review";
    const TITLE: &'static str = "Reviews";

    fn item_id(item: &ProductReview) -> String {
        item.id.clone()
    }
}
