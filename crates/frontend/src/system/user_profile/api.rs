use contracts::shared::{ApiError, ApiResponse};
use contracts::system::user_profile::{ChangePasswordForm, ProfileForm, UserProfile};
use serde_json::Value;
use web_sys::File;

use crate::shared::api_client::{ApiClient, Method, MultipartForm, Transport};

const PROFILE_PATH: &str = "/user-profile";
const PASSWORD_PATH: &str = "/user-profile/password";

pub async fn fetch_profile<T: Transport>(client: &ApiClient<T>) -> Result<UserProfile, ApiError> {
    let response: ApiResponse<UserProfile> = client.get(PROFILE_PATH, None).await?;
    Ok(response.data)
}

/// Sent as multipart so a new avatar can ride along.
pub async fn update_profile<T: Transport>(
    client: &ApiClient<T>,
    form: &ProfileForm,
    avatar: Option<File>,
) -> Result<ApiResponse<UserProfile>, ApiError> {
    let mut body = MultipartForm::from_json(form)?;
    if let Some(file) = avatar {
        body = body.with_file("avatar", file);
    }
    client.send_multipart(Method::Put, PROFILE_PATH, body).await
}

pub async fn change_password<T: Transport>(
    client: &ApiClient<T>,
    form: &ChangePasswordForm,
) -> Result<ApiResponse<Value>, ApiError> {
    client.send_json(Method::Put, PASSWORD_PATH, form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::RequestBody;
    use futures::executor::block_on;

    #[test]
    fn profile_is_unwrapped() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"data":{"id":"s-1","name":"Dana","email":"dana@shop.test","role":"admin"}}"#,
        );

        let profile = block_on(fetch_profile(&client(&transport).with_token(Some("tok")))).unwrap();
        assert_eq!(profile.name, "Dana");
        assert_eq!(transport.last().url, "http://api.test/api/user-profile");
    }

    #[test]
    fn profile_update_is_multipart() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"Profile updated","data":{"id":"s-1","name":"Dana K","email":"dana@shop.test"}}"#);

        let form = ProfileForm {
            name: "Dana K".into(),
            email: "dana@shop.test".into(),
            phone: String::new(),
        };
        let response = block_on(update_profile(&client(&transport), &form, None)).unwrap();
        assert_eq!(response.message, "Profile updated");

        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        match sent.body {
            RequestBody::Multipart(body) => {
                assert_eq!(body.field("name"), Some("Dana K"));
                assert!(body.files.is_empty());
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[test]
    fn password_confirmation_is_not_sent() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"Password changed"}"#);

        let form = ChangePasswordForm {
            current_password: "old-pass".into(),
            new_password: "new-password".into(),
            confirm_password: "new-password".into(),
        };
        block_on(change_password(&client(&transport), &form)).unwrap();

        let sent = transport.last();
        assert_eq!(sent.url, "http://api.test/api/user-profile/password");
        match sent.body {
            RequestBody::Json(json) => {
                assert!(json.contains("\"newPassword\":\"new-password\""));
                assert!(!json.contains("confirm"));
            }
            other => panic!("expected json body, got {:?}", other),
        }
    }
}
