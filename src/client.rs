use dotenv::dotenv;
use futures::future::BoxFuture;
use reqwest::Client;
use std::env;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, SubmitError};
use crate::models::complaint::ComplaintInput;
use crate::models::status::{ErrorBody, SubmitReceipt};

pub const ENDPOINT_VAR: &str = "COMPLAINT_API_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
pub const SEND_COMPLAINT_PATH: &str = "/send-complaint";

/// Delivers a validated complaint to the complaint service.
///
/// The returned future owns everything it needs, so callers can hold on to it
/// independently of the transport borrow.
pub trait ComplaintTransport {
    fn send_complaint(
        &self,
        complaint: &ComplaintInput,
    ) -> BoxFuture<'static, Result<SubmitReceipt, SubmitError>>;
}

/// Where the complaint service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        let trimmed = endpoint.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint {
                key: ENDPOINT_VAR,
                value: endpoint,
            });
        }

        Ok(Self {
            endpoint: trimmed.to_string(),
        })
    }

    /// Load configuration from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENDPOINT_VAR).filter(|value| !value.trim().is_empty()) {
            Some(endpoint) => Self::new(endpoint),
            None => Self::new(DEFAULT_ENDPOINT),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn send_complaint_url(&self) -> String {
        format!("{}{}", self.endpoint, SEND_COMPLAINT_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// HTTP client for the complaint service
#[derive(Debug, Clone)]
pub struct ComplaintClient {
    client: Client,
    config: ClientConfig,
}

impl ComplaintClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client from `COMPLAINT_API_ENDPOINT` (or the local default).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST the complaint to `/send-complaint` and decode the reply.
    pub async fn submit(&self, complaint: &ComplaintInput) -> Result<SubmitReceipt, SubmitError> {
        post_complaint(self.client.clone(), self.config.send_complaint_url(), complaint.clone()).await
    }
}

impl Default for ComplaintClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl ComplaintTransport for ComplaintClient {
    fn send_complaint(
        &self,
        complaint: &ComplaintInput,
    ) -> BoxFuture<'static, Result<SubmitReceipt, SubmitError>> {
        Box::pin(post_complaint(
            self.client.clone(),
            self.config.send_complaint_url(),
            complaint.clone(),
        ))
    }
}

async fn post_complaint(
    client: Client,
    url: String,
    complaint: ComplaintInput,
) -> Result<SubmitReceipt, SubmitError> {
    info!("Sending complaint to complaint service");
    debug!("API URL: {}", url);
    debug!("Complaint payload: {:?}", complaint);

    let res = client.post(&url).json(&complaint).send().await?;
    let status = res.status();
    info!("Response received with status: {}", status);

    // Any 2xx is an accepted complaint, even if the body says nothing useful
    if status.is_success() {
        let receipt = match res.json::<SubmitReceipt>().await {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!("Could not decode success body: {}", err);
                SubmitReceipt::default()
            }
        };
        return Ok(receipt);
    }

    // A rejection without a readable JSON body still counts as a rejection
    let body = match res.json::<ErrorBody>().await {
        Ok(body) => body,
        Err(err) => {
            warn!("Could not decode error body: {}", err);
            ErrorBody::default()
        }
    };

    Err(SubmitError::Rejected {
        status,
        error: body.error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_endpoint_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(
            config.send_complaint_url(),
            "http://127.0.0.1:5000/send-complaint"
        );
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_blank_endpoint_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[(ENDPOINT_VAR, "  ")])).unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::from_lookup(lookup_from(&[(
            ENDPOINT_VAR,
            "https://complaints.example.com/api/",
        )]))
        .unwrap();
        assert_eq!(
            config.send_complaint_url(),
            "https://complaints.example.com/api/send-complaint"
        );
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let err = ClientConfig::new("ftp://example.com").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEndpoint {
                key: ENDPOINT_VAR,
                value: "ftp://example.com".to_string(),
            }
        );
        assert!(ClientConfig::new("localhost:5000").is_err());
    }
}
