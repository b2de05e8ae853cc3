//! Async executor for `FoodClient` requests.
//!
//! # Design
//! `FoodApi` pairs the stateless `FoodClient` with a `reqwest::Client` and
//! performs exactly one round trip per call: no retries, no caching, no
//! timeout beyond the transport default. Every failure (serialization,
//! transport, non-2xx, undecodable body) is logged with its cause and then
//! wrapped in the operation's `FoodError` variant.

use chrono::Utc;

use crate::client::FoodClient;
use crate::error::{ApiError, FoodError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{FoodFormInput, FoodRecord};

#[derive(Debug, Clone)]
pub struct FoodApi {
    client: FoodClient,
    http: reqwest::Client,
}

impl FoodApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            client: FoodClient::new(base_url),
            http,
        }
    }

    pub fn client(&self) -> &FoodClient {
        &self.client
    }

    /// Every record in store order.
    pub async fn list_all(&self) -> Result<Vec<FoodRecord>, FoodError> {
        let request = self.client.build_list_all();
        self.run(Operation::Load, Ok(request), FoodClient::parse_list_all)
            .await
    }

    /// Records whose name matches `query`, as filtered by the store.
    pub async fn search(&self, query: &str) -> Result<Vec<FoodRecord>, FoodError> {
        let request = self.client.build_search(query);
        self.run(Operation::Search, Ok(request), FoodClient::parse_search)
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<FoodRecord, FoodError> {
        let request = self.client.build_get_by_id(id);
        self.run(Operation::Fetch, Ok(request), FoodClient::parse_get_by_id)
            .await
    }

    /// Creation time is taken from the local clock at submission.
    pub async fn create(&self, input: &FoodFormInput) -> Result<FoodRecord, FoodError> {
        let request = self.client.build_create(input, Utc::now());
        self.run(Operation::Create, request, FoodClient::parse_create)
            .await
    }

    pub async fn update(&self, id: &str, input: &FoodFormInput) -> Result<FoodRecord, FoodError> {
        let request = self.client.build_update(id, input);
        self.run(Operation::Update, request, FoodClient::parse_update)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), FoodError> {
        let request = self.client.build_delete(id);
        self.run(Operation::Delete, Ok(request), FoodClient::parse_delete)
            .await
    }

    async fn run<T>(
        &self,
        operation: Operation,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&FoodClient, HttpResponse) -> Result<T, ApiError>,
    ) -> Result<T, FoodError> {
        let outcome = match request {
            Ok(request) => self.exchange(request, parse).await,
            Err(cause) => Err(cause),
        };
        outcome.map_err(|cause| {
            log::error!("{operation} failed: {cause}");
            operation.fail(cause)
        })
    }

    async fn exchange<T>(
        &self,
        request: HttpRequest,
        parse: impl FnOnce(&FoodClient, HttpResponse) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        parse(&self.client, response)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{} {}", request.method, request.path);

        let mut builder = self.http.request(to_reqwest(request.method), &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        log::debug!("{} {} -> {status}", request.method, request.path);
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
