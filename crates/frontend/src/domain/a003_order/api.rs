use contracts::domain::a003_order::aggregate::{Order, UpdateOrderStatusForm};
use contracts::shared::{ApiError, ApiResponse};

use super::Orders;
use crate::shared::api_client::{ApiClient, Transport};
use crate::shared::resource::ResourceService;

/// `PUT /order/{id}/status`.
pub async fn update_status<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    form: &UpdateOrderStatusForm,
) -> Result<ApiResponse<Order>, ApiError> {
    ResourceService::<Orders, T>::new(client.clone())
        .put_action(id, "status", form)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::{Method, RequestBody};
    use contracts::domain::a003_order::aggregate::OrderStatus;
    use futures::executor::block_on;

    #[test]
    fn status_goes_to_the_status_endpoint() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"message":"Order updated","data":{"id":"o-1","orderNumber":"1001","customerName":"Bo","total":10,"status":"shipped"}}"#,
        );

        let form = UpdateOrderStatusForm {
            status: OrderStatus::Shipped,
            courier_id: Some("k-1".into()),
            tracking_number: "TRK1".into(),
            ..Default::default()
        };
        let response = block_on(update_status(&client(&transport), "o-1", &form)).unwrap();
        assert_eq!(response.data.status, OrderStatus::Shipped);

        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/order/o-1/status");
        match sent.body {
            RequestBody::Json(json) => {
                assert!(json.contains(r#""status":"shipped""#));
                assert!(json.contains(r#""courierId":"k-1""#));
                assert!(json.contains(r#""trackingNumber":"TRK1""#));
            }
            other => panic!("expected json body, got {:?}", other),
        }
    }

    #[test]
    fn rejected_transition_keeps_server_message() {
        let transport = ScriptedTransport::default();
        transport.reply(409, r#"{"status":409,"message":"Delivered orders cannot be cancelled"}"#);

        let form = UpdateOrderStatusForm {
            status: OrderStatus::Cancelled,
            ..Default::default()
        };
        let err = block_on(update_status(&client(&transport), "o-1", &form)).unwrap_err();
        assert_eq!(err.status, Some(409));
        assert_eq!(err.message, "Delivered orders cannot be cancelled");
    }
}
