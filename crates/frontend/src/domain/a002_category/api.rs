use contracts::domain::a002_category::aggregate::{Category, CategoryForm};
use contracts::shared::{ApiError, ApiResponse};
use web_sys::File;

use super::Categories;
use crate::shared::api_client::{ApiClient, MultipartForm, Transport};
use crate::shared::query::ListQuery;
use crate::shared::resource::ResourceService;

/// Upper bound for option lists; categories are few.
const OPTIONS_LIMIT: u32 = 200;

/// Creates (`id == None`) or updates a category, with an optional image.
pub async fn save_category<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    form: &CategoryForm,
    image: Option<File>,
) -> Result<ApiResponse<Category>, ApiError> {
    let mut body = MultipartForm::from_json(form)?;
    if let Some(file) = image {
        body = body.with_file("image", file);
    }
    let service = ResourceService::<Categories, T>::new(client.clone());
    match id {
        Some(id) => service.update_multipart(id, body).await,
        None => service.create_multipart(body).await,
    }
}

/// `(id, name)` pairs for selects, sorted by name.
pub async fn category_options<T: Transport>(
    client: &ApiClient<T>,
) -> Result<Vec<(String, String)>, ApiError> {
    let page = ResourceService::<Categories, T>::new(client.clone())
        .fetch_all(&ListQuery::new(1, OPTIONS_LIMIT), None)
        .await?;
    let mut options: Vec<(String, String)> = page
        .items
        .into_iter()
        .map(|category| (category.id, category.name))
        .collect();
    options.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::{Method, RequestBody};
    use futures::executor::block_on;

    #[test]
    fn options_are_sorted_by_name() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"data":{"rows":[{"id":"c-2","name":"shoes"},{"id":"c-1","name":"Bags"}],"totalItems":2}}"#,
        );

        let options = block_on(category_options(&client(&transport))).unwrap();
        assert_eq!(
            options,
            vec![
                ("c-1".to_string(), "Bags".to_string()),
                ("c-2".to_string(), "shoes".to_string())
            ]
        );
        assert!(transport.last().url.contains("limit=200"));
    }

    #[test]
    fn new_category_is_posted_as_multipart() {
        let transport = ScriptedTransport::default();
        transport.reply(201, r#"{"status":201,"message":"Category created","data":{"id":"c-3","name":"Hats"}}"#);

        let form = CategoryForm {
            name: "Hats".into(),
            ..Default::default()
        };
        let response = block_on(save_category(&client(&transport), None, &form, None)).unwrap();
        assert_eq!(response.data.id, "c-3");

        let sent = transport.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test/api/category");
        match sent.body {
            RequestBody::Multipart(body) => {
                assert_eq!(body.field("name"), Some("Hats"));
                assert_eq!(body.field("isActive"), Some("true"));
                assert_eq!(body.field("parentId"), None);
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }
}
