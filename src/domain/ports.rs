use crate::domain::model::{TicketRequest, TransportFailure, TransportReply};
use async_trait::async_trait;

/// HTTP execution seam. The service talks to the network only through this
/// trait so tests can inject a double; the production implementation is
/// [`crate::adapters::ReqwestTransport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST the built request and report either the settled reply or a
    /// structured low-level failure. One attempt, no retries.
    async fn execute(
        &self,
        request: TicketRequest,
    ) -> std::result::Result<TransportReply, TransportFailure>;
}
