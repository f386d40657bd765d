use contracts::domain::a006_courier::aggregate::{Courier, CourierForm};
use contracts::shared::{ApiError, ApiResponse};

use super::Couriers;
use crate::shared::api_client::{ApiClient, Transport};
use crate::shared::query::ListQuery;
use crate::shared::resource::ResourceService;

const OPTIONS_LIMIT: u32 = 100;

pub async fn save_courier<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    form: &CourierForm,
) -> Result<ApiResponse<Courier>, ApiError> {
    let service = ResourceService::<Couriers, T>::new(client.clone());
    match id {
        Some(id) => service.update(id, form).await,
        None => service.create(form).await,
    }
}

/// Active couriers, for the shipping select of an order.
pub async fn active_couriers<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Courier>, ApiError> {
    let query = ListQuery::new(1, OPTIONS_LIMIT).with_filter("isActive", "true");
    let page = ResourceService::<Couriers, T>::new(client.clone())
        .fetch_all(&query, None)
        .await?;
    // older servers ignore the filter
    Ok(page.items.into_iter().filter(|c| c.is_active).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::{Method, RequestBody};
    use futures::executor::block_on;

    #[test]
    fn inactive_couriers_are_left_out() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"data":{"items":[
                {"id":"k-1","name":"Fast","isActive":true},
                {"id":"k-2","name":"Slow","isActive":false}
            ],"total":2}}"#,
        );

        let couriers = block_on(active_couriers(&client(&transport))).unwrap();
        assert_eq!(couriers.len(), 1);
        assert_eq!(couriers[0].id, "k-1");
        assert!(transport.last().url.contains("isActive=true"));
    }

    #[test]
    fn existing_courier_is_updated_as_json() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"Courier updated","data":{"id":"k-1","name":"Fast"}}"#);

        let form = CourierForm {
            name: "Fast".into(),
            phone: "555-0100".into(),
            ..Default::default()
        };
        let response = block_on(save_courier(&client(&transport), Some("k-1"), &form)).unwrap();
        assert_eq!(response.message, "Courier updated");

        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/courier/k-1");
        match sent.body {
            RequestBody::Json(json) => assert!(json.contains(r#""phone":"555-0100""#)),
            other => panic!("expected json body, got {:?}", other),
        }
    }
}
