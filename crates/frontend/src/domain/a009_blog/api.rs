use contracts::domain::a009_blog::aggregate::{BlogPost, BlogPostForm};
use contracts::shared::{ApiError, ApiResponse};
use web_sys::File;

use super::BlogPosts;
use crate::shared::api_client::{ApiClient, MultipartForm, Transport};
use crate::shared::resource::ResourceService;

/// Creates or updates a post; the banner image is optional on both.
pub async fn save_post<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    form: &BlogPostForm,
    banner: Option<File>,
) -> Result<ApiResponse<BlogPost>, ApiError> {
    let mut body = MultipartForm::from_json(form)?;
    if let Some(file) = banner {
        body = body.with_file("banner", file);
    }
    let service = ResourceService::<BlogPosts, T>::new(client.clone());
    match id {
        Some(id) => service.update_multipart(id, body).await,
        None => service.create_multipart(body).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::RequestBody;
    use contracts::domain::common::parse_tags;
    use futures::executor::block_on;

    #[test]
    fn tags_travel_as_a_json_array() {
        let transport = ScriptedTransport::default();
        transport.reply(201, r#"{"status":201,"data":{"id":"b-1","title":"Hello"}}"#);

        let form = BlogPostForm {
            title: "Hello".into(),
            content: "First post".into(),
            tags: parse_tags("news, shop,news"),
            ..Default::default()
        };
        block_on(save_post(&client(&transport), None, &form, None)).unwrap();

        match transport.last().body {
            RequestBody::Multipart(body) => {
                assert_eq!(body.field("tags"), Some(r#"["news","shop"]"#));
                assert_eq!(body.field("isPublished"), Some("false"));
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }
}
