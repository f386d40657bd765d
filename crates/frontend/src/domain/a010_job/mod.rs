pub mod api;
pub mod ui;

use contracts::domain::a010_job::aggregate::Job;

use crate::shared::resource::Resource;

pub struct Jobs;

impl Resource for Jobs {
    type Item = Job;

    const PATH: &'static str = "job";
    const TAB_KEY: &'static str = "a010_job";
    const TITLE: &'static str = "Careers";

    fn item_id(item: &Job) -> String {
        item.id.clone()
    }
}
