// Adapters layer: concrete implementations for external systems.
// Currently only the reqwest-backed HTTP transport.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::model::{
    TicketRequest, TransportFailure, TransportReply, CODE_OFFLINE, CODE_TIMED_OUT,
};
use crate::domain::ports::HttpTransport;

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wrap a caller-configured client (custom timeouts, proxies).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: TicketRequest,
    ) -> std::result::Result<TransportReply, TransportFailure> {
        let mut builder = self.client.post(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status().as_u16();
        debug!(status, "support backend replied");
        // reqwest only yields parseable HTTP responses, so this adapter never
        // produces `TransportReply::NotHttp` itself.
        Ok(TransportReply::Http { status })
    }
}

/// Fold reqwest's error surface onto the platform-style failure codes the
/// dispatcher classifies on: connect failures count as offline, timeouts as
/// timed out, everything else keeps its description.
fn classify_reqwest_error(err: reqwest::Error) -> TransportFailure {
    let code = if err.is_timeout() {
        CODE_TIMED_OUT
    } else if err.is_connect() {
        CODE_OFFLINE
    } else {
        0
    };
    TransportFailure::new(code, err.to_string())
}
