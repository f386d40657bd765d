use contracts::domain::a008_media::aggregate::MediaFile;
use contracts::shared::{ApiError, ApiResponse};
use web_sys::File;

use super::MediaLibrary;
use crate::shared::api_client::{ApiClient, Method, MultipartForm, Transport};
use crate::shared::resource::Resource;

/// Uploads every file in one request under the `files` field.
pub async fn upload_media<T: Transport>(
    client: &ApiClient<T>,
    files: Vec<File>,
) -> Result<ApiResponse<Vec<MediaFile>>, ApiError> {
    if files.is_empty() {
        return Err(ApiError::conflict("Select at least one file to upload"));
    }
    let body = MultipartForm::default().with_files("files", files);
    client
        .send_multipart(Method::Post, &format!("/{}", MediaLibrary::PATH), body)
        .await
}

/// `(archive entry name, download url)` for each file.
pub fn zip_entries(files: &[MediaFile], resolve: impl Fn(&str) -> String) -> Vec<(String, String)> {
    files
        .iter()
        .map(|file| (file.display_name().to_string(), resolve(&file.filename)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use futures::executor::block_on;

    #[test]
    fn empty_selection_sends_nothing() {
        let transport = ScriptedTransport::default();
        let err = block_on(upload_media(&client(&transport), Vec::new())).unwrap_err();
        assert_eq!(err.message, "Select at least one file to upload");
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn zip_entries_use_original_names() {
        let files = vec![
            MediaFile {
                id: "m-1".into(),
                filename: "a1b2.png".into(),
                original_name: "banner.png".into(),
                ..Default::default()
            },
            MediaFile {
                id: "m-2".into(),
                filename: "c3d4.jpg".into(),
                ..Default::default()
            },
        ];
        let entries = zip_entries(&files, |name| format!("https://cdn.test/static/{}", name));
        assert_eq!(
            entries,
            vec![
                ("banner.png".to_string(), "https://cdn.test/static/a1b2.png".to_string()),
                ("c3d4.jpg".to_string(), "https://cdn.test/static/c3d4.jpg".to_string()),
            ]
        );
    }
}
