pub mod api;
pub mod ui;

use contracts::domain::a007_staff::aggregate::Staff;

use crate::shared::resource::Resource;

pub struct StaffMembers;

impl Resource for StaffMembers {
    type Item = Staff;

    const PATH: &'static str = "staff";
    const TAB_KEY: &'static str = "a007_staff";
    const TITLE: &'static str = "Staff";

    fn item_id(item: &Staff) -> String {
        item.id.clone()
    }
}
