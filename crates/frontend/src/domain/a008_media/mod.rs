pub mod api;
pub mod ui;

use contracts::domain::a008_media::aggregate::MediaFile;

use crate::shared::resource::Resource;

pub struct MediaLibrary;

impl Resource for MediaLibrary {
    type Item = MediaFile;

    const PATH: &'static str = "media";
    const TAB_KEY: &'static str = "a008_media";
    const TITLE: &'static str = "Media library";

    fn item_id(item: &MediaFile) -> String {
        item.id.clone()
    }
}
