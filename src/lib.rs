pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::ReqwestTransport;
pub use crate::config::ServiceConfig;
pub use crate::core::service::HelpBridgeService;
pub use crate::domain::model::SupportTicket;
pub use crate::domain::ports::HttpTransport;
pub use crate::utils::error::{Result, SubmissionError};
