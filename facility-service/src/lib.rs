pub mod alerts;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics_server;
pub mod notify;
pub mod observability;
pub mod sweeper;
pub mod usage;

pub use error::ServiceError;
