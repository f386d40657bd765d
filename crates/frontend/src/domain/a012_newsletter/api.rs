use contracts::domain::a012_newsletter::aggregate::{CampaignResult, NewsletterCampaignForm};
use contracts::shared::{ApiError, ApiResponse};

use crate::shared::api_client::{ApiClient, Method, Transport};

/// Mails the campaign to every active subscriber.
pub async fn send_campaign<T: Transport>(
    client: &ApiClient<T>,
    form: &NewsletterCampaignForm,
) -> Result<ApiResponse<CampaignResult>, ApiError> {
    client.send_json(Method::Post, "/newsletter/send", form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::RequestBody;
    use crate::shared::export::build_csv;
    use contracts::domain::a012_newsletter::aggregate::Subscriber;
    use futures::executor::block_on;

    #[test]
    fn campaign_reports_recipients() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"Newsletter sent","data":{"recipients":42}}"#);

        let form = NewsletterCampaignForm {
            subject: "Autumn sale".into(),
            body: "Everything 20% off".into(),
        };
        let response = block_on(send_campaign(&client(&transport), &form)).unwrap();
        assert_eq!(response.data.recipients, 42);

        let sent = transport.last();
        assert_eq!(sent.url, "http://api.test/api/newsletter/send");
        match sent.body {
            RequestBody::Json(json) => {
                assert_eq!(json, r#"{"subject":"Autumn sale","body":"Everything 20% off"}"#)
            }
            other => panic!("expected json body, got {:?}", other),
        }
    }

    #[test]
    fn subscribers_export_one_row_each() {
        let rows = vec![
            Subscriber {
                id: "n-1".into(),
                email: "a@shop.test".into(),
                is_active: true,
                subscribed_at: Some("2026-03-01T10:00:00Z".into()),
            },
            Subscriber {
                id: "n-2".into(),
                email: "b@shop.test".into(),
                is_active: false,
                subscribed_at: None,
            },
        ];
        let csv = build_csv(&rows);
        assert_eq!(
            csv,
            "\u{FEFF}Email,Status,Subscribed\r\na@shop.test,Active,01 Mar 2026\r\nb@shop.test,Unsubscribed,-\r\n"
        );
    }
}
