pub mod api;
pub mod ui;

use contracts::domain::a005_coupon::aggregate::Coupon;

use crate::shared::resource::Resource;

pub struct Coupons;

impl Resource for Coupons {
    type Item = Coupon;

    const PATH: &'static str = "coupon";
    const TAB_KEY: &'static str = "a005_coupon";
    const TITLE: &'static str = "Coupons";

    fn item_id(item: &Coupon) -> String {
        item.id.clone()
    }
}
