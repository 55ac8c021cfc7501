//! The greeting capability the form calls into.
//!
//! The handler only sees [`GreetingService`]; whether the greeting is
//! produced in-process or by a remote endpoint is decided from config.

pub mod http;
pub mod local;

use crate::config::{ServiceConfig, ServiceKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub use http::HttpGreeter;
pub use local::LocalGreeter;

#[derive(Debug, Error)]
pub enum GreetError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed reply: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("greeting rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait GreetingService: Send + Sync {
    /// Turns a name into a greeting. The name is passed through untouched.
    async fn greet(&self, name: &str) -> Result<String, GreetError>;
}

pub fn from_config(cfg: &ServiceConfig) -> Arc<dyn GreetingService> {
    match cfg.kind {
        ServiceKind::Local => Arc::new(LocalGreeter::new(&cfg.template)),
        ServiceKind::Http => {
            let greeter = HttpGreeter::new(&cfg.endpoint, &cfg.method);
            tracing::info!(url = %greeter.url(), "using remote greeting service");
            Arc::new(greeter)
        }
    }
}
