use contracts::domain::a011_faq::aggregate::{Faq, FaqForm};
use contracts::shared::{ApiError, ApiResponse};

use super::Faqs;
use crate::shared::api_client::{ApiClient, Transport};
use crate::shared::resource::ResourceService;

pub async fn save_faq<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    form: &FaqForm,
) -> Result<ApiResponse<Faq>, ApiError> {
    let service = ResourceService::<Faqs, T>::new(client.clone());
    match id {
        Some(id) => service.update(id, form).await,
        None => service.create(form).await,
    }
}

/// Position a new entry gets: one past the highest known.
pub fn next_position(existing: &[Faq]) -> u32 {
    existing
        .iter()
        .map(|faq| faq.position)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::Method;
    use futures::executor::block_on;

    #[test]
    fn new_entries_go_last() {
        assert_eq!(next_position(&[]), 1);
        let existing = vec![
            Faq {
                position: 3,
                ..Default::default()
            },
            Faq {
                position: 7,
                ..Default::default()
            },
        ];
        assert_eq!(next_position(&existing), 8);
    }

    #[test]
    fn update_is_a_put_on_the_entry() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"data":{"id":"f-1","question":"Shipping?","answer":"Yes"}}"#);

        let form = FaqForm {
            question: "Shipping?".into(),
            answer: "Yes".into(),
            ..Default::default()
        };
        block_on(save_faq(&client(&transport), Some("f-1"), &form)).unwrap();
        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/faq/f-1");
    }
}
