//! HTTP bindings for the product and checkout endpoints.

use serde::Deserialize;

use vpaygo_products::Product;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// `{status, message, product?}` envelope returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
    #[serde(default)]
    pub product: Option<Product>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/products`
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let res = self.http.get(self.url("/api/products")).send().await?;
        let res = ensure_success(res).await?;
        Ok(res.json().await?)
    }

    /// `POST /api/products`
    pub async fn add_product(&self, product: &Product) -> Result<ApiMessage, ClientError> {
        let res = self
            .http
            .post(self.url("/api/products"))
            .json(product)
            .send()
            .await?;
        let res = ensure_success(res).await?;
        Ok(res.json().await?)
    }

    /// `POST /api/checkout`
    pub async fn checkout(&self) -> Result<ApiMessage, ClientError> {
        let res = self.http.post(self.url("/api/checkout")).send().await?;
        let res = ensure_success(res).await?;
        Ok(res.json().await?)
    }
}

async fn ensure_success(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or(body);
    Err(ClientError::Status { status, message })
}
