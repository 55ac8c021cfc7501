use super::{GreetError, GreetingService};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GreetRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GreetReply {
    Greeting { greeting: String },
    Error { error: String },
}

/// Calls a remote greeting endpoint: `POST {endpoint}/{method}` with
/// `{"name": ...}`, answered by `{"greeting": ...}` or, when the service
/// refuses, `{"error": ...}`.
///
/// No timeout and no retry; a call that never answers stays pending.
pub struct HttpGreeter {
    client: Client,
    url: String,
}

impl HttpGreeter {
    pub fn new(endpoint: &str, method: &str) -> Self {
        Self::with_client(Client::new(), endpoint, method)
    }

    pub fn with_client(client: Client, endpoint: &str, method: &str) -> Self {
        let url = format!(
            "{}/{}",
            endpoint.trim_end_matches('/'),
            method.trim_start_matches('/')
        );
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GreetingService for HttpGreeter {
    async fn greet(&self, name: &str) -> Result<String, GreetError> {
        tracing::debug!(url = %self.url, "calling greeting service");
        let resp = self
            .client
            .post(&self.url)
            .json(&GreetRequest { name })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(GreetError::Status {
                status: status.as_u16(),
                body,
            });
        }
        match serde_json::from_str::<GreetReply>(&body)? {
            GreetReply::Greeting { greeting } => Ok(greeting),
            GreetReply::Error { error } => Err(GreetError::Rejected(error)),
        }
    }
}
