//! CRUD calls for a [`Resource`].

use std::marker::PhantomData;

use contracts::shared::{ApiError, ApiResponse, Paginated};
use serde::Serialize;
use serde_json::Value;
use web_sys::AbortSignal;

use super::Resource;
use crate::shared::api_client::{ApiClient, GlooTransport, Method, MultipartForm, Transport};
use crate::shared::query::ListQuery;

pub struct ResourceService<R: Resource, T: Transport = GlooTransport> {
    client: ApiClient<T>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceService<R, GlooTransport> {
    /// Service over the browser client, authorized with `token`.
    pub fn browser(token: Option<&str>) -> Self {
        Self::new(ApiClient::browser().with_token(token))
    }
}

impl<R: Resource, T: Transport> ResourceService<R, T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    fn collection() -> String {
        format!("/{}", R::PATH)
    }

    fn member(id: &str) -> String {
        format!("/{}/{}", R::PATH, urlencoding::encode(id))
    }

    pub async fn fetch_all(
        &self,
        query: &ListQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<Paginated<R::Item>, ApiError> {
        let path = query.apply_to(&Self::collection());
        let response: ApiResponse<Paginated<R::Item>> = self.client.get(&path, signal).await?;
        Ok(response.data)
    }

    /// Every item matching `query`, walking the pages `page_size` at a time.
    pub async fn fetch_every(
        &self,
        query: &ListQuery,
        page_size: u32,
    ) -> Result<Vec<R::Item>, ApiError> {
        let mut query = query.clone();
        query.limit = page_size.max(1);
        query.page = 1;
        let mut items = Vec::new();
        loop {
            let page = self.fetch_all(&query, None).await?;
            let received = page.items.len();
            let pages = page.page_count();
            items.extend(page.items);
            if received == 0 || query.page >= pages {
                return Ok(items);
            }
            query.page += 1;
        }
    }

    pub async fn fetch_one(&self, id: &str) -> Result<R::Item, ApiError> {
        let response: ApiResponse<R::Item> = self.client.get(&Self::member(id), None).await?;
        Ok(response.data)
    }

    pub async fn create<F: Serialize>(&self, form: &F) -> Result<ApiResponse<R::Item>, ApiError> {
        self.client
            .send_json(Method::Post, &Self::collection(), form)
            .await
    }

    pub async fn create_multipart(
        &self,
        form: MultipartForm,
    ) -> Result<ApiResponse<R::Item>, ApiError> {
        self.client
            .send_multipart(Method::Post, &Self::collection(), form)
            .await
    }

    pub async fn update<F: Serialize>(
        &self,
        id: &str,
        form: &F,
    ) -> Result<ApiResponse<R::Item>, ApiError> {
        self.client
            .send_json(Method::Put, &Self::member(id), form)
            .await
    }

    pub async fn update_multipart(
        &self,
        id: &str,
        form: MultipartForm,
    ) -> Result<ApiResponse<R::Item>, ApiError> {
        self.client
            .send_multipart(Method::Put, &Self::member(id), form)
            .await
    }

    /// Returns the server's confirmation message.
    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        let response: ApiResponse<Value> = self.client.delete(&Self::member(id)).await?;
        Ok(response.message)
    }

    /// `PUT /{path}/{id}/{action}`, used by status and moderation endpoints.
    pub async fn put_action<F: Serialize>(
        &self,
        id: &str,
        action: &str,
        body: &F,
    ) -> Result<ApiResponse<R::Item>, ApiError> {
        let path = format!("{}/{}", Self::member(id), action);
        self.client.send_json(Method::Put, &path, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::RequestBody;
    use futures::executor::block_on;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
    struct Widget {
        id: String,
        name: String,
    }

    struct Widgets;

    impl Resource for Widgets {
        type Item = Widget;
        const PATH: &'static str = "widget";
        const TAB_KEY: &'static str = "widget";
        const TITLE: &'static str = "Widgets";

        fn item_id(item: &Widget) -> String {
            item.id.clone()
        }
    }

    fn service(transport: &ScriptedTransport) -> ResourceService<Widgets, ScriptedTransport> {
        ResourceService::new(client(transport))
    }

    #[test]
    fn fetch_all_unwraps_the_page() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r#"{"status":200,"message":"ok","data":{"items":[{"id":"w1","name":"Bolt"}],"total":1,"page":1,"limit":10}}"#,
        );

        let page = block_on(service(&transport).fetch_all(&ListQuery::new(1, 10), None)).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Bolt");
        assert_eq!(transport.last().url, "http://api.test/api/widget?page=1&limit=10");
    }

    #[test]
    fn fetch_all_omits_blank_search() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"data":{"items":[]}}"#);

        let mut query = ListQuery::new(3, 25);
        query.search_term = "  ".into();
        query.search_by = "name".into();
        block_on(service(&transport).fetch_all(&query, None)).unwrap();
        assert!(!transport.last().url.contains("searchTerm"));
        assert!(!transport.last().url.contains("searchBy"));
    }

    #[test]
    fn fetch_every_walks_all_pages() {
        let transport = ScriptedTransport::default();
        transport
            .reply(200, r#"{"data":{"items":[{"id":"w1","name":"a"},{"id":"w2","name":"b"}],"total":3,"limit":2}}"#)
            .reply(200, r#"{"data":{"items":[{"id":"w3","name":"c"}],"total":3,"limit":2}}"#);

        let mut query = ListQuery::new(4, 10);
        query.set_filter("isActive", "true");
        let items = block_on(service(&transport).fetch_every(&query, 2)).unwrap();
        assert_eq!(items.len(), 3);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].url, "http://api.test/api/widget?page=1&limit=2&isActive=true");
        assert_eq!(sent[1].url, "http://api.test/api/widget?page=2&limit=2&isActive=true");
    }

    #[test]
    fn ids_are_escaped_in_member_paths() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"data":{"id":"a b","name":"x"}}"#);

        let item = block_on(service(&transport).fetch_one("a b")).unwrap();
        assert_eq!(item.id, "a b");
        assert_eq!(transport.last().url, "http://api.test/api/widget/a%20b");
    }

    #[test]
    fn update_puts_json() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"message":"Updated","data":{"id":"w1","name":"Nut"}}"#);

        let body = serde_json::json!({ "name": "Nut" });
        let resp = block_on(service(&transport).update("w1", &body)).unwrap();
        assert_eq!(resp.message, "Updated");
        let sent = transport.last();
        assert_eq!(sent.method, Method::Put);
        assert!(matches!(sent.body, RequestBody::Json(_)));
    }

    #[test]
    fn write_answered_with_null_data_succeeds() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"Widget updated","data":null}"#);

        let resp = block_on(service(&transport).put_action("w1", "status", &serde_json::json!({})))
            .unwrap();
        assert_eq!(resp.message, "Widget updated");
        assert_eq!(resp.data, Widget::default());
        assert_eq!(transport.last().url, "http://api.test/api/widget/w1/status");
    }

    #[test]
    fn delete_returns_message_and_propagates_errors() {
        let transport = ScriptedTransport::default();
        transport
            .reply(200, r#"{"status":200,"message":"Widget deleted"}"#)
            .reply(409, r#"{"error":{"message":"Widget is in use"}}"#);

        let svc = service(&transport);
        assert_eq!(block_on(svc.delete("w1")).unwrap(), "Widget deleted");
        let err = block_on(svc.delete("w2")).unwrap_err();
        assert_eq!(err.status, Some(409));
        assert_eq!(err.message, "Widget is in use");
    }
}
