use crate::{CliClientResult, ClientError, DealGateway};

use dp_config::ApiConfig;
use dp_core::{DealId, NewDeal, RawDeal, StageUpdate};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

const DEALS_PATH: &str = "/api/pipeline/deals";
const UPDATE_STAGE_PATH: &str = "/api/pipeline/update-stage";

/// HTTP client for the pipeline REST API
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    /// * `user_id` - Optional user ID to include in X-User-Id header
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from configuration, applying the request timeout if set
    pub fn from_config(config: &ApiConfig) -> CliClientResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id.clone(),
            client: builder.build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request with optional user ID header
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        req
    }

    #[track_caller]
    fn parse_url(&self, path: &str) -> CliClientResult<Url> {
        Url::parse(&self.url(path)).map_err(|e| ClientError::Url {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Execute request and handle errors. An empty success body yields `Null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let (code, message) = match body.get("error") {
                Some(Value::String(message)) => (status.as_u16().to_string(), message.clone()),
                Some(error) => (
                    error
                        .get("code")
                        .and_then(|v| v.as_str())
                        .map(String::from)
                        .unwrap_or_else(|| status.as_u16().to_string()),
                    error
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("Unknown error")
                        .to_string(),
                ),
                None => (
                    status.as_u16().to_string(),
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string(),
                ),
            };
            return Err(ClientError::api_error(code, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl DealGateway for Client {
    async fn list_deals(&self) -> CliClientResult<Vec<RawDeal>> {
        let url = self.parse_url(DEALS_PATH)?;
        let mut body = self.execute(self.request(Method::GET, url)).await?;

        match body.get_mut("data").map(Value::take) {
            Some(data) if !data.is_null() => {
                let records: Vec<Value> = serde_json::from_value(data)?;
                Ok(records
                    .into_iter()
                    .filter_map(|record| match serde_json::from_value(record) {
                        Ok(raw) => Some(raw),
                        Err(e) => {
                            log::warn!("Skipping unreadable deal record: {}", e);
                            None
                        }
                    })
                    .collect())
            }
            _ => Err(ClientError::MissingData {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    async fn update_stage(&self, update: &StageUpdate) -> CliClientResult<()> {
        let url = self.parse_url(UPDATE_STAGE_PATH)?;
        let req = self.request(Method::POST, url).json(update);
        self.execute(req).await?;
        Ok(())
    }

    async fn create_deal(&self, deal: &NewDeal) -> CliClientResult<Value> {
        let url = self.parse_url(DEALS_PATH)?;
        let mut body = self.execute(self.request(Method::POST, url).json(deal)).await?;

        // Some deployments wrap the record in `data`
        Ok(match body.get_mut("data").map(Value::take) {
            Some(data) if !data.is_null() => data,
            _ => body,
        })
    }

    async fn delete_deal(&self, id: &DealId) -> CliClientResult<()> {
        let mut url = self.parse_url(DEALS_PATH)?;
        url.query_pairs_mut().append_pair("id", id.as_str());
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}
