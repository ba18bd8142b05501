//! Request identity resolution
//!
//! Maps an inbound request to the owner id that scopes every note operation.
//! The core never authenticates and never trusts an owner id supplied in a
//! request body; whatever the resolver returns is stamped into the operation
//! before it reaches an actor.

use crate::config::{IdentityConfig, IdentityMode};
use crate::error::{Error, Result};
use axum::http::HeaderMap;

/// Resolves the owner identity of an inbound request
pub struct IdentityResolver {
    mode: IdentityMode,
    static_owner: String,
    header_name: String,
}

impl IdentityResolver {
    /// Build a resolver from configuration
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            mode: config.mode,
            static_owner: config.static_owner.clone(),
            header_name: config.header_name.clone(),
        }
    }

    /// Resolve the owner id for a request.
    ///
    /// `static` mode answers the configured owner for every request, the
    /// single-user development setup. `header` mode reads the configured
    /// trusted header, for deployments behind an authenticating proxy, and
    /// rejects requests where it is missing or empty.
    pub fn resolve(&self, headers: &HeaderMap) -> Result<String> {
        match self.mode {
            IdentityMode::Static => Ok(self.static_owner.clone()),
            IdentityMode::Header => headers
                .get(&self.header_name)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
                .ok_or_else(|| {
                    Error::BadRequest(format!("Missing identity header {}", self.header_name))
                }),
        }
    }
}
