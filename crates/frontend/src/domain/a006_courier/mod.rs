pub mod api;
pub mod ui;

use contracts::domain::a006_courier::aggregate::Courier;

use crate::shared::resource::Resource;

pub struct Couriers;

impl Resource for Couriers {
    type Item = Courier;

    const PATH: &'static str = "courier";
    const TAB_KEY: &'static str = "a006_courier";
    const TITLE: &'static str = "Couriers";

    fn item_id(item: &Courier) -> String {
        item.id.clone()
    }
}
