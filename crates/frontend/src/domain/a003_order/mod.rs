pub mod api;
pub mod ui;

use contracts::domain::a003_order::aggregate::Order;

use crate::shared::resource::Resource;

/// Orders are placed by the storefront; the console only views them and
/// moves them through their statuses.
pub struct Orders;

impl Resource for Orders {
    type Item = Order;

    const PATH: &'static str = "order";
    const TAB_KEY: &'static str = "a003_order";
    const TITLE: &'static str = "Orders";

    fn item_id(item: &Order) -> String {
        item.id.clone()
    }
}
