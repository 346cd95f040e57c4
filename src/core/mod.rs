pub mod request;
pub mod service;

pub use crate::domain::model::{SupportTicket, TicketRequest, TransportFailure, TransportReply};
pub use crate::domain::ports::HttpTransport;
pub use crate::utils::error::Result;
