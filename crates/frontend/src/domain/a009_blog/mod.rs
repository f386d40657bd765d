pub mod api;
pub mod ui;

use contracts::domain::a009_blog::aggregate::BlogPost;

use crate::shared::resource::Resource;

pub struct BlogPosts;

impl Resource for BlogPosts {
    type Item = BlogPost;

    const PATH: &'static str = "blog";
    const TAB_KEY: &'static str = "a009_blog";
    const TITLE: &'static str = "Blog";

    fn item_id(item: &BlogPost) -> String {
        item.id.clone()
    }
}
