use contracts::shared::{ApiError, ApiResponse};
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_client::{ApiClient, Method, Transport};

/// `POST /auth/login`; a reply without a token is an error.
pub async fn login<T: Transport>(
    client: &ApiClient<T>,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let response: ApiResponse<Option<LoginResponse>> = client
        .send_json(Method::Post, "/auth/login", request)
        .await?;
    response
        .data
        .filter(|data| !data.token.is_empty())
        .ok_or_else(|| ApiError::decode(200, "Login response did not contain a token"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use contracts::shared::ApiErrorKind;
    use futures::executor::block_on;

    fn request() -> LoginRequest {
        LoginRequest {
            email: "dana@shop.test".into(),
            password: "secret-pass".into(),
        }
    }

    #[test]
    fn token_and_user_are_returned() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"message":"ok","data":{"token":"tok-9","user":{"id":"s-1","name":"Dana","email":"dana@shop.test","role":"admin"}}}"#,
        );

        let response = block_on(login(&client(&transport), &request())).unwrap();
        assert_eq!(response.token, "tok-9");
        assert!(response.user.is_admin());

        let sent = transport.last();
        assert_eq!(sent.url, "http://api.test/api/auth/login");
        assert_eq!(sent.header("authorization"), None);
    }

    #[test]
    fn wrong_password_keeps_server_message() {
        let transport = ScriptedTransport::default();
        transport.reply(401, r#"{"status":401,"message":"Invalid credentials"}"#);

        let err = block_on(login(&client(&transport), &request())).unwrap_err();
        assert_eq!(err.message, "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn missing_token_is_a_decode_error() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"ok"}"#);

        let err = block_on(login(&client(&transport), &request())).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Decode);
    }
}
