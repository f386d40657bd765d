use contracts::domain::a001_product::{Product, ProductForm};
use contracts::shared::{ApiError, ApiResponse};
use web_sys::File;

use super::Products;
use crate::shared::api_client::{ApiClient, MultipartForm, Transport};
use crate::shared::resource::ResourceService;

/// Creates (`id == None`) or updates a product.
///
/// New images are attached as `images` files; variations and variants go
/// as JSON text fields next to the scalar ones.
pub async fn save_product<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    form: &ProductForm,
    images: Vec<File>,
) -> Result<ApiResponse<Product>, ApiError> {
    let body = MultipartForm::from_json(form)?.with_files("images", images);
    let service = ResourceService::<Products, T>::new(client.clone());
    match id {
        Some(id) => service.update_multipart(id, body).await,
        None => service.create_multipart(body).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::{Method, RequestBody};
    use contracts::domain::a001_product::{ProductDraft, ProductStatus};
    use futures::executor::block_on;

    fn form_with_variants() -> ProductForm {
        let mut draft = ProductDraft::default();
        let size = draft.add_variation("Size", "").unwrap();
        draft.add_variation_item(&size, "S").unwrap();
        draft.add_variation_item(&size, "M").unwrap();
        draft.regenerate_variants();

        ProductForm {
            name: "Linen shirt".into(),
            description: "Breathable".into(),
            price: 49.0,
            stock: 12,
            category_id: "c-1".into(),
            status: ProductStatus::Published,
            variations: draft.variations,
            variants: draft.variants,
            ..Default::default()
        }
    }

    #[test]
    fn update_puts_to_the_member_path() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"Product updated","data":{"id":"p 1","name":"Linen shirt","price":49.0}}"#);

        let response =
            block_on(save_product(&client(&transport), Some("p 1"), &form_with_variants(), Vec::new()))
                .unwrap();
        assert_eq!(response.message, "Product updated");

        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/product/p%201");
    }

    #[test]
    fn variants_travel_as_json_fields() {
        let transport = ScriptedTransport::default();
        transport.reply(201, r#"{"data":{"id":"p-2","name":"Linen shirt","price":49.0}}"#);

        block_on(save_product(&client(&transport), None, &form_with_variants(), Vec::new())).unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, Method::Post);
        let RequestBody::Multipart(body) = sent.body else {
            panic!("expected multipart body");
        };
        assert_eq!(body.field("status"), Some("published"));
        assert_eq!(body.field("price"), Some("49.0"));
        let variants: serde_json::Value =
            serde_json::from_str(body.field("variants").unwrap()).unwrap();
        assert_eq!(variants.as_array().map(Vec::len), Some(2));
        assert_eq!(variants[1]["variantDetails"][0]["variationItemValue"], "M");
        assert_eq!(body.field("discountPrice"), None);
    }
}
