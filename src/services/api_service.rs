// src/services/api_service.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::common::error::AppError;

// Envoltorio fino sobre la API REST del backend: GET/POST con JSON.
// Los servicios tipados se apoyan en este trait, así se pueden probar sin red.
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, AppError>;

    async fn post(&self, path: &str, body: Value) -> Result<Value, AppError>;
}

#[derive(Clone)]
pub struct HttpApiService {
    client: Client,
    base_url: String,
}

impl HttpApiService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // El backend contesta {success:false, error} también con 4xx/5xx:
    // si el cuerpo es JSON se devuelve igual, la falla la decide quien llama.
    async fn read_json(response: reqwest::Response) -> Result<Value, AppError> {
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(AppError::Http { status: status.as_u16() }),
            Err(e) => Err(AppError::Decode(e)),
        }
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    async fn get(&self, path: &str) -> Result<Value, AppError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, AppError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(&body).send().await?;
        Self::read_json(response).await
    }
}
