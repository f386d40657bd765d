use contracts::domain::a007_staff::aggregate::{Staff, StaffForm, StaffStatusRequest};
use contracts::shared::{ApiError, ApiResponse};
use web_sys::File;

use super::StaffMembers;
use crate::shared::api_client::{ApiClient, MultipartForm, Transport};
use crate::shared::resource::ResourceService;

/// Creates or updates a staff account; a blank password is left out so
/// editing does not reset it.
pub async fn save_staff<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    form: &StaffForm,
    avatar: Option<File>,
) -> Result<ApiResponse<Staff>, ApiError> {
    let mut form = form.clone();
    if form.password.as_deref().is_some_and(|p| p.is_empty()) {
        form.password = None;
    }
    let mut body = MultipartForm::from_json(&form)?;
    if let Some(file) = avatar {
        body = body.with_file("avatar", file);
    }
    let service = ResourceService::<StaffMembers, T>::new(client.clone());
    match id {
        Some(id) => service.update_multipart(id, body).await,
        None => service.create_multipart(body).await,
    }
}

pub async fn set_active<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    is_active: bool,
) -> Result<ApiResponse<Staff>, ApiError> {
    ResourceService::<StaffMembers, T>::new(client.clone())
        .put_action(id, "status", &StaffStatusRequest { is_active })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::{Method, RequestBody};
    use contracts::domain::a007_staff::aggregate::StaffRole;
    use futures::executor::block_on;

    #[test]
    fn blank_password_is_not_sent() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"data":{"id":"s-1","name":"Dana","email":"dana@shop.test"}}"#);

        let form = StaffForm {
            name: "Dana".into(),
            email: "dana@shop.test".into(),
            role: StaffRole::Editor,
            password: Some(String::new()),
            ..Default::default()
        };
        block_on(save_staff(&client(&transport), Some("s-1"), &form, None)).unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        match sent.body {
            RequestBody::Multipart(body) => {
                assert_eq!(body.field("role"), Some("editor"));
                assert_eq!(body.field("password"), None);
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[test]
    fn deactivation_hits_status_endpoint() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"Staff deactivated","data":{"id":"s-1","name":"Dana","email":"d@x.y","isActive":false}}"#);

        let response = block_on(set_active(&client(&transport), "s-1", false)).unwrap();
        assert!(!response.data.is_active);

        let sent = transport.last();
        assert_eq!(sent.url, "http://api.test/api/staff/s-1/status");
        match sent.body {
            RequestBody::Json(json) => assert_eq!(json, r#"{"isActive":false}"#),
            other => panic!("expected json body, got {:?}", other),
        }
    }
}
