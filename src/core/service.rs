//! Submission dispatch and outcome classification.
//!
//! Both submit surfaces funnel into one classification routine so the async
//! and callback modes can never diverge in outcome mapping.

use std::sync::Arc;

use tracing::debug;

use crate::adapters::ReqwestTransport;
use crate::config::ServiceConfig;
use crate::core::request::build_ticket_request;
use crate::domain::model::{
    SupportTicket, TicketRequest, TransportFailure, TransportReply, CODE_OFFLINE, CODE_TIMED_OUT,
};
use crate::domain::ports::HttpTransport;
use crate::utils::error::{Result, SubmissionError};

/// Client for the HelpBridge ticket endpoint. One instance may serve any
/// number of concurrent submissions; the resolved endpoint and the transport
/// handle are fixed at construction and never mutated afterwards.
pub struct HelpBridgeService<T: HttpTransport = ReqwestTransport> {
    config: ServiceConfig,
    transport: Arc<T>,
}

impl HelpBridgeService<ReqwestTransport> {
    /// Create a service with the default reqwest-backed transport. The
    /// `HELPBRIDGE_BASE_URL` environment variable overrides `base_endpoint`;
    /// with neither present this fails with
    /// [`SubmissionError::MissingEndpoint`].
    pub fn new(base_endpoint: Option<&str>) -> Result<Self> {
        Self::with_transport(base_endpoint, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> HelpBridgeService<T> {
    /// Create a service with an injected transport. Endpoint resolution is
    /// the same as [`HelpBridgeService::new`].
    pub fn with_transport(base_endpoint: Option<&str>, transport: T) -> Result<Self> {
        Ok(Self {
            config: ServiceConfig::resolve(base_endpoint)?,
            transport: Arc::new(transport),
        })
    }

    /// Submit one ticket and suspend until the outcome settles.
    pub async fn submit_ticket(&self, ticket: &SupportTicket) -> Result<()> {
        let request = build_ticket_request(ticket, self.config.base_endpoint())?;
        dispatch(Arc::clone(&self.transport), request).await
    }
}

impl<T: HttpTransport + 'static> HelpBridgeService<T> {
    /// Submit one ticket, invoking `callback` exactly once when the outcome
    /// settles. The transport operation is started before this returns and
    /// no cancellation handle is exposed. A request that cannot be built
    /// (invalid URL) invokes the callback immediately without contacting the
    /// network.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit_ticket_with_callback<F>(&self, ticket: &SupportTicket, callback: F)
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let request = match build_ticket_request(ticket, self.config.base_endpoint()) {
            Ok(request) => request,
            Err(err) => {
                callback(Err(err));
                return;
            }
        };

        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            callback(dispatch(transport, request).await);
        });
    }
}

/// Reduce one transport round trip to exactly one terminal outcome.
async fn dispatch<T: HttpTransport>(transport: Arc<T>, request: TicketRequest) -> Result<()> {
    debug!(url = %request.url, "dispatching support ticket");
    match transport.execute(request).await {
        // Any 200 counts as a successful submission; the body is
        // deliberately not inspected.
        Ok(TransportReply::Http { status: 200 }) => Ok(()),
        Ok(TransportReply::Http { status }) => Err(SubmissionError::HttpError(status)),
        Ok(TransportReply::NotHttp) => Err(SubmissionError::TransportError(
            "Invalid response format".to_string(),
        )),
        Err(failure) => Err(classify_failure(failure)),
    }
}

/// Map a structured low-level failure onto the error taxonomy.
fn classify_failure(failure: TransportFailure) -> SubmissionError {
    match failure.code {
        CODE_OFFLINE => SubmissionError::NoConnectivity,
        CODE_TIMED_OUT => SubmissionError::Timeout,
        _ => SubmissionError::TransportError(failure.description),
    }
}
