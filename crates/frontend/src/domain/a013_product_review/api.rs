use contracts::domain::a013_product_review::aggregate::{ProductReview, ReviewModerationForm};
use contracts::shared::{ApiError, ApiResponse};

use super::Reviews;
use crate::shared::api_client::{ApiClient, Transport};
use crate::shared::resource::ResourceService;

/// Approves or hides a review, optionally with a public reply.
pub async fn moderate<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    form: &ReviewModerationForm,
) -> Result<ApiResponse<ProductReview>, ApiError> {
    let mut form = form.clone();
    form.reply = form.reply.take().filter(|r| !r.trim().is_empty());
    ResourceService::<Reviews, T>::new(client.clone())
        .put_action(id, "moderate", &form)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::RequestBody;
    use futures::executor::block_on;

    #[test]
    fn approval_with_blank_reply_sends_null() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"data":{"id":"r-1","productId":"p-1","customerName":"Bo","rating":4,"isApproved":true}}"#,
        );

        let form = ReviewModerationForm {
            is_approved: true,
            reply: Some("   ".into()),
        };
        let response = block_on(moderate(&client(&transport), "r-1", &form)).unwrap();
        assert!(response.data.is_approved);

        let sent = transport.last();
        assert_eq!(sent.url, "http://api.test/api/product-review/r-1/moderate");
        match sent.body {
            RequestBody::Json(json) => assert_eq!(json, r#"{"isApproved":true,"reply":null}"#),
            other => panic!("expected json body, got {:?}", other),
        }
    }
}
