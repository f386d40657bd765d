use contracts::domain::a004_customer::aggregate::{Customer, CustomerStatusForm};
use contracts::shared::{ApiError, ApiResponse};

use super::Customers;
use crate::shared::api_client::{ApiClient, Transport};
use crate::shared::resource::ResourceService;

/// Blocks or unblocks an account.
pub async fn set_status<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    form: &CustomerStatusForm,
) -> Result<ApiResponse<Customer>, ApiError> {
    ResourceService::<Customers, T>::new(client.clone())
        .put_action(id, "status", form)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::{Method, RequestBody};
    use futures::executor::block_on;

    #[test]
    fn blocking_sends_flag_and_reason() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"message":"Customer blocked","data":{"id":"u-1","name":"Bo","email":"bo@shop.test","isBlocked":true}}"#,
        );

        let form = CustomerStatusForm {
            is_blocked: true,
            reason: "chargebacks".into(),
        };
        let response = block_on(set_status(&client(&transport), "u-1", &form)).unwrap();
        assert!(response.data.is_blocked);

        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/customer/u-1/status");
        match sent.body {
            RequestBody::Json(json) => {
                assert_eq!(json, r#"{"isBlocked":true,"reason":"chargebacks"}"#)
            }
            other => panic!("expected json body, got {:?}", other),
        }
    }
}
