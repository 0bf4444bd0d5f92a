use crate::adapters::accept_records;
use crate::adapters::file_source::json_items_to_records;
use crate::domain::model::VehicleRecord;
use crate::domain::ports::VehicleSource;
use crate::utils::error::{RankError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Fetches a user's vehicles from a JSON endpoint (`GET <endpoint>?owner_id=<id>`).
pub struct HttpVehicleSource {
    client: Client,
    endpoint: String,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl HttpVehicleSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl VehicleSource for HttpVehicleSource {
    async fn fetch_vehicles(&self, owner_id: Option<u64>) -> Result<Vec<VehicleRecord>> {
        let mut request = self.client.get(&self.endpoint);

        // 添加自定義標頭
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(id) = owner_id {
            request = request.query(&[("owner_id", id)]);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        let response = response.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        let serde_json::Value::Array(items) = body else {
            return Err(RankError::UnexpectedResponse {
                message: "expected a JSON array of vehicles".to_string(),
            });
        };

        // 伺服器端已依擁有者篩選，這裡再確認一次
        Ok(accept_records(json_items_to_records(items), owner_id))
    }
}
