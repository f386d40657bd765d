use contracts::domain::a015_inquiry::aggregate::{Inquiry, InquiryReplyForm};
use contracts::shared::{ApiError, ApiResponse};

use crate::shared::api_client::{ApiClient, Method, Transport};

/// Emails the reply to the sender and moves the inquiry to the chosen status.
pub async fn reply<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    form: &InquiryReplyForm,
) -> Result<ApiResponse<Inquiry>, ApiError> {
    let path = format!("/inquiry/{}/reply", urlencoding::encode(id));
    client.send_json(Method::Post, &path, form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::RequestBody;
    use contracts::domain::a015_inquiry::aggregate::InquiryStatus;
    use futures::executor::block_on;

    #[test]
    fn reply_posts_to_member_endpoint() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"data":{"id":"q 1","name":"Ann","email":"ann@shop.test","message":"Where is my parcel?","status":"resolved"}}"#,
        );

        let form = InquiryReplyForm {
            message: "It ships tomorrow".into(),
            status: InquiryStatus::Resolved,
        };
        let response = block_on(reply(&client(&transport), "q 1", &form)).unwrap();
        assert_eq!(response.data.status, InquiryStatus::Resolved);

        let sent = transport.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test/api/inquiry/q%201/reply");
        match sent.body {
            RequestBody::Json(json) => {
                assert_eq!(json, r#"{"message":"It ships tomorrow","status":"resolved"}"#)
            }
            other => panic!("expected json body, got {:?}", other),
        }
    }

    #[test]
    fn server_refusal_is_returned() {
        let transport = ScriptedTransport::default();
        transport.reply(422, r#"{"status":422,"message":"Mail server unavailable"}"#);

        let form = InquiryReplyForm {
            message: "Hello".into(),
            status: InquiryStatus::InProgress,
        };
        let err = block_on(reply(&client(&transport), "q-2", &form)).unwrap_err();
        assert_eq!(err.status, Some(422));
        assert_eq!(err.message, "Mail server unavailable");
    }
}
