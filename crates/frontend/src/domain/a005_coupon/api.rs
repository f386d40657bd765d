use contracts::domain::a005_coupon::aggregate::{
    Coupon, CouponCheckRequest, CouponCheckResponse, CouponForm,
};
use contracts::shared::{ApiError, ApiResponse};

use super::Coupons;
use crate::shared::api_client::{ApiClient, Method, Transport};
use crate::shared::resource::ResourceService;

/// Whether `code` is still free.
pub async fn check_code<T: Transport>(client: &ApiClient<T>, code: &str) -> Result<bool, ApiError> {
    let request = CouponCheckRequest {
        code: code.trim().to_uppercase(),
    };
    let response: ApiResponse<CouponCheckResponse> = client
        .send_json(Method::Post, "/coupon/check", &request)
        .await?;
    Ok(response.data.available)
}

/// Saves a coupon with its code upper-cased.
///
/// The code is checked for availability first, unless it is the one the
/// coupon already had.
pub async fn save_coupon<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    previous_code: Option<&str>,
    form: &CouponForm,
) -> Result<ApiResponse<Coupon>, ApiError> {
    let form = form.clone().normalized();
    let unchanged = previous_code.is_some_and(|code| code.eq_ignore_ascii_case(&form.code));
    if !unchanged && !check_code(client, &form.code).await? {
        return Err(ApiError::conflict(format!(
            "Coupon code {} is already in use",
            form.code
        )));
    }

    let service = ResourceService::<Coupons, T>::new(client.clone());
    match id {
        Some(id) => service.update(id, &form).await,
        None => service.create(&form).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::RequestBody;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use futures::executor::block_on;

    fn form(code: &str) -> CouponForm {
        CouponForm {
            code: code.into(),
            discount_value: 10.0,
            starts_at: "2026-01-01".into(),
            expires_at: "2026-02-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_code_is_checked_then_created_upper_case() {
        let transport = ScriptedTransport::default();
        transport
            .reply(200, r#"{"status":200,"data":{"available":true}}"#)
            .reply(201, r#"{"status":201,"message":"Coupon created","data":{"id":"cp-1","code":"SPRING10"}}"#);

        let response = block_on(save_coupon(&client(&transport), None, None, &form(" spring10 "))).unwrap();
        assert_eq!(response.data.code, "SPRING10");

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].url, "http://api.test/api/coupon/check");
        match &sent[0].body {
            RequestBody::Json(json) => assert_eq!(json, r#"{"code":"SPRING10"}"#),
            other => panic!("expected json body, got {:?}", other),
        }
        assert_eq!(sent[1].method, Method::Post);
        match &sent[1].body {
            RequestBody::Json(json) => assert!(json.contains(r#""code":"SPRING10""#)),
            other => panic!("expected json body, got {:?}", other),
        }
    }

    #[test]
    fn taken_code_is_refused_without_saving() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"data":{"available":false}}"#);

        let err = block_on(save_coupon(&client(&transport), None, None, &form("SALE"))).unwrap_err();
        assert_eq!(err.status, Some(409));
        assert_eq!(err.message, "Coupon code SALE is already in use");
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn unchanged_code_skips_the_check() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"data":{"id":"cp-1","code":"SALE"}}"#);

        block_on(save_coupon(&client(&transport), Some("cp-1"), Some("SALE"), &form("sale"))).unwrap();
        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/coupon/cp-1");
        assert_eq!(transport.sent.borrow().len(), 1);
    }
}
