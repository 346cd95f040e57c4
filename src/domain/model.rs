use serde::{Deserialize, Serialize};
use url::Url;

/// A user-submitted support request. All fields are free-form text; no
/// validation happens in this layer, that is the caller's or the backend's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub name: String,
    pub email: String,
    /// Categorical ticket code, sent verbatim as the `type` form field.
    pub ticket_type: String,
    pub subject: String,
    pub message: String,
}

impl SupportTicket {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        ticket_type: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ticket_type: ticket_type.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Complete outbound request descriptor. Method is always POST.
#[derive(Debug, Clone)]
pub struct TicketRequest {
    pub url: Url,
    /// Header order is part of the emulated browser fingerprint.
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

/// What the transport observed once the request settled without a low-level
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportReply {
    /// A parseable HTTP response and its status code.
    Http { status: u16 },
    /// The peer answered with something not recognizable as HTTP.
    NotHttp,
}

/// Structured low-level transport failure: a platform error code plus a
/// human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub code: i32,
    pub description: String,
}

impl TransportFailure {
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

/// Platform error code for "not connected to the internet".
pub const CODE_OFFLINE: i32 = -1009;

/// Platform error code for "the operation timed out".
pub const CODE_TIMED_OUT: i32 = -1001;
