use contracts::domain::a010_job::aggregate::{Job, JobForm};
use contracts::shared::{ApiError, ApiResponse};

use super::Jobs;
use crate::shared::api_client::{ApiClient, Transport};
use crate::shared::resource::ResourceService;

pub async fn save_job<T: Transport>(
    client: &ApiClient<T>,
    id: Option<&str>,
    form: &JobForm,
) -> Result<ApiResponse<Job>, ApiError> {
    let service = ResourceService::<Jobs, T>::new(client.clone());
    match id {
        Some(id) => service.update(id, form).await,
        None => service.create(form).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::{Method, RequestBody};
    use contracts::domain::a010_job::aggregate::EmploymentType;
    use futures::executor::block_on;

    #[test]
    fn employment_type_is_kebab_case_on_the_wire() {
        let transport = ScriptedTransport::default();
        transport.reply(201, r#"{"status":201,"data":{"id":"j-1","title":"Picker","employmentType":"part-time"}}"#);

        let form = JobForm {
            title: "Picker".into(),
            employment_type: EmploymentType::PartTime,
            deadline: "2026-11-30".into(),
            ..Default::default()
        };
        let response = block_on(save_job(&client(&transport), None, &form)).unwrap();
        assert_eq!(response.data.employment_type, EmploymentType::PartTime);

        let sent = transport.last();
        assert_eq!(sent.method, Method::Post);
        match sent.body {
            RequestBody::Json(json) => {
                assert!(json.contains(r#""employmentType":"part-time""#));
                assert!(json.contains(r#""deadline":"2026-11-30""#));
            }
            other => panic!("expected json body, got {:?}", other),
        }
    }
}
