//! HTTP client for the admin API.
//!
//! Every request carries the API key and, when signed in, the bearer token.
//! Every failure comes back as one [`ApiError`]; callers never inspect raw
//! responses.

use std::rc::Rc;

use async_trait::async_trait;
use contracts::shared::ApiError;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::{AbortSignal, File, FormData};

use super::api_utils::api_root;
use super::config::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Multipart payload: flat text fields plus named files.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, File)>,
}

impl MultipartForm {
    /// Flattens a form DTO into text fields.
    ///
    /// Nulls are skipped, strings go as-is, anything else (numbers, bools,
    /// nested arrays/objects such as variants) goes as compact JSON.
    pub fn from_json<S: Serialize>(form: &S) -> Result<Self, ApiError> {
        let value = serde_json::to_value(form)?;
        let mut fields = Vec::new();
        if let Value::Object(map) = value {
            for (key, value) in map {
                match value {
                    Value::Null => {}
                    Value::String(text) => fields.push((key, text)),
                    other => fields.push((key, other.to_string())),
                }
            }
        }
        Ok(Self {
            fields,
            files: Vec::new(),
        })
    }

    pub fn with_file(mut self, name: &str, file: File) -> Self {
        self.files.push((name.to_string(), file));
        self
    }

    pub fn with_files(mut self, name: &str, files: impl IntoIterator<Item = File>) -> Self {
        self.files
            .extend(files.into_iter().map(|file| (name.to_string(), file)));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(String),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub signal: Option<AbortSignal>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. `Err` only when no response was received.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser fetch via `gloo-net`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn form_data(form: &MultipartForm) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(|e| ApiError::transport(js_message(&e)))?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value)
            .map_err(|e| ApiError::transport(js_message(&e)))?;
    }
    for (name, file) in &form.files {
        data.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|e| ApiError::transport(js_message(&e)))?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        builder = builder.abort_signal(request.signal.as_ref());

        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder
                .header("Content-Type", "application/json")
                .body(json.as_str()),
            // the browser sets the multipart boundary itself
            RequestBody::Multipart(form) => builder.body(form_data(form)?),
        }
        .map_err(|e| ApiError::transport(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

/// Client bound to the API root, the API key and an optional token.
pub struct ApiClient<T: Transport = GlooTransport> {
    transport: Rc<T>,
    base_url: String,
    api_key: String,
    token: Option<String>,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            token: self.token.clone(),
        }
    }
}

impl ApiClient<GlooTransport> {
    /// Client for the configured API.
    pub fn browser() -> Self {
        Self::new(GlooTransport, api_root(), config().api.api_key.clone())
    }

    /// Browser client carrying the session token.
    pub fn authorized(token: Option<&str>) -> Self {
        Self::browser().with_token(token)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            transport: Rc::new(transport),
            base_url: base_url.into(),
            api_key: api_key.into(),
            token: None,
        }
    }

    /// Same client, authorized with `token` (blank tokens are dropped).
    pub fn with_token(&self, token: Option<&str>) -> Self {
        let mut client = self.clone();
        client.token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        client
    }

    pub fn url(&self, path: &str) -> String {
        super::api_utils::join_url(&self.base_url, path)
    }

    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        signal: Option<&AbortSignal>,
    ) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if !self.api_key.is_empty() {
            headers.push(("x-api-key".to_string(), self.api_key.clone()));
        }
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
            signal: signal.cloned(),
        }
    }

    pub async fn get<R>(&self, path: &str, signal: Option<&AbortSignal>) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let request = self.build_request(Method::Get, path, RequestBody::Empty, signal);
        self.execute(request).await
    }

    pub async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let json = serde_json::to_string(body)?;
        let request = self.build_request(method, path, RequestBody::Json(json), None);
        self.execute(request).await
    }

    pub async fn send_multipart<R>(
        &self,
        method: Method,
        path: &str,
        form: MultipartForm,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let request = self.build_request(method, path, RequestBody::Multipart(form), None);
        self.execute(request).await
    }

    pub async fn delete<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let request = self.build_request(Method::Delete, path, RequestBody::Empty, None);
        self.execute(request).await
    }

    async fn execute<R>(&self, request: HttpRequest) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let method = request.method;
        let url = request.url.clone();
        log::debug!("{} {}", method.as_str(), url);

        let result = match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                if response.body.trim().is_empty() {
                    Ok(R::default())
                } else {
                    serde_json::from_str::<R>(&response.body).map_err(|e| {
                        ApiError::decode(
                            response.status,
                            format!("Failed to parse response: {}", e),
                        )
                    })
                }
            }
            Ok(response) => Err(ApiError::from_response(response.status, &response.body)),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            log::warn!(
                "{} {} failed: {} ({:?}, status {:?})",
                method.as_str(),
                url,
                err.message,
                err.kind,
                err.status
            );
        }
        result
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    /// Replays queued outcomes and records every request it receives.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        replies: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
        pub sent: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl ScriptedTransport {
        pub fn reply(&self, status: u16, body: &str) -> &Self {
            self.replies.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(&self, err: ApiError) -> &Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        pub fn last(&self) -> HttpRequest {
            self.sent
                .borrow()
                .last()
                .cloned()
                .expect("no request was sent")
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::transport("no scripted reply")))
        }
    }

    pub fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
        ApiClient::new(transport.clone(), "http://api.test/api", "key-123")
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use contracts::shared::{ApiErrorKind, ApiResponse};
    use futures::executor::block_on;

    #[test]
    fn transport_failure_keeps_its_message() {
        let transport = ScriptedTransport::default();
        transport.fail(ApiError::transport("Failed to fetch"));

        let err = block_on(client(&transport).get::<ApiResponse<Value>>("/product", None))
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Transport);
        assert_eq!(err.message, "Failed to fetch");
        assert_eq!(err.status, None);
    }

    #[test]
    fn not_found_is_normalized() {
        let transport = ScriptedTransport::default();
        transport.reply(404, r#"{"status":404,"message":"Not found"}"#);

        let err = block_on(client(&transport).get::<ApiResponse<Value>>("/product/9", None))
            .unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "Not found");
        assert_eq!(err.name(), "ApplicationError");
    }

    #[test]
    fn api_key_and_token_are_attached() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"status":200,"message":"ok","data":1}"#);

        let api = client(&transport).with_token(Some("tok"));
        let resp: ApiResponse<u32> = block_on(api.get("/faq", None)).unwrap();
        assert_eq!(resp.data, 1);

        let sent = transport.last();
        assert_eq!(sent.url, "http://api.test/api/faq");
        assert_eq!(sent.header("x-api-key"), Some("key-123"));
        assert_eq!(sent.header("authorization"), Some("Bearer tok"));
    }

    #[test]
    fn blank_token_sends_no_authorization() {
        let transport = ScriptedTransport::default();
        transport.reply(200, "{}");

        let api = client(&transport).with_token(Some("  "));
        let _: ApiResponse<Value> = block_on(api.get("/faq", None)).unwrap();
        assert_eq!(transport.last().header("Authorization"), None);
    }

    #[test]
    fn empty_success_body_yields_default() {
        let transport = ScriptedTransport::default();
        transport.reply(204, "");

        let resp: ApiResponse<Value> = block_on(client(&transport).delete("/faq/1")).unwrap();
        assert!(resp.data.is_null());
        assert_eq!(transport.last().method, Method::Delete);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let transport = ScriptedTransport::default();
        transport.reply(200, r#"{"data": "#);

        let err = block_on(client(&transport).get::<ApiResponse<Value>>("/faq", None))
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Decode);
        assert_eq!(err.status, Some(200));
    }

    #[test]
    fn json_body_is_serialized() {
        let transport = ScriptedTransport::default();
        transport.reply(201, r#"{"data":{"id":"f-1"}}"#);

        let body = serde_json::json!({ "question": "Returns?" });
        let resp: ApiResponse<Value> =
            block_on(client(&transport).send_json(Method::Post, "/faq", &body)).unwrap();
        assert_eq!(resp.data["id"], "f-1");

        match transport.last().body {
            RequestBody::Json(json) => assert!(json.contains("Returns?")),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn multipart_fields_flatten_top_level_values() {
        let form = serde_json::json!({
            "name": "Shirt",
            "price": 12.5,
            "discountPrice": null,
            "variants": [{"id": 1}],
        });
        let multipart = MultipartForm::from_json(&form).unwrap();
        assert_eq!(multipart.field("name"), Some("Shirt"));
        assert_eq!(multipart.field("price"), Some("12.5"));
        assert_eq!(multipart.field("discountPrice"), None);
        assert_eq!(multipart.field("variants"), Some(r#"[{"id":1}]"#));
    }
}
