pub mod api;
pub mod ui;

use contracts::domain::a004_customer::aggregate::Customer;

use crate::shared::resource::Resource;

pub struct Customers;

impl Resource for Customers {
    type Item = Customer;

    const PATH: &'static str = "customer";
    const TAB_KEY: &'static str = "a004_customer";
    const TITLE: &'static str = "Customers";

    fn item_id(item: &Customer) -> String {
        item.id.clone()
    }
}
