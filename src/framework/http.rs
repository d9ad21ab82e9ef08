//! reqwest-backed [`Transport`] speaking JSON over HTTP.

use crate::framework::{ClientError, ResourceRequest, Transport};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Sends each [`ResourceRequest`] as a single HTTP round trip.
///
/// No retries and no timeout beyond what the underlying `reqwest::Client` was
/// built with.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all, fields(verb = request.verb(), url = request.url()))]
    async fn send(&self, request: ResourceRequest) -> Result<Value, ClientError> {
        debug!("Sending request");
        let is_delete = matches!(request, ResourceRequest::Delete { .. });
        let builder = match request {
            ResourceRequest::List { url } => self.client.get(url),
            ResourceRequest::Create { url, body } => self.client.post(url).json(&body),
            ResourceRequest::Update { url, body } => self.client.put(url).json(&body),
            ResourceRequest::Delete { url } => self.client.delete(url),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), len = bytes.len(), "Response received");

        // a 2xx on DELETE is success whatever the body says
        if bytes.is_empty() || is_delete {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
