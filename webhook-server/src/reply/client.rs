//! Reply API client.
//!
//! The [`ReplySender`] trait is the seam the webhook handler talks through;
//! [`LineClient`] is the reqwest-backed implementation that calls the
//! Messaging API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::info;
use url::Url;

use super::message::{OutboundMessage, ReplyRequest};
use crate::config::Config;

/// Result of a reply call: the API's HTTP status and raw response body.
///
/// The status is returned as data rather than mapped to an error; the caller
/// decides what a non-2xx reply means and logs the body either way.
#[derive(Debug, Clone)]
pub struct ReplyStatus {
    pub status: u16,
    pub body: String,
}

/// Transport-level failure of a reply call.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("reply request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid reply endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Capability to send a reply tied to a received event.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send_reply(
        &self,
        reply_token: &str,
        messages: &[OutboundMessage],
    ) -> Result<ReplyStatus, ReplyError>;
}

/// Reqwest-backed client for the Messaging API reply endpoint.
pub struct LineClient {
    http: Client,
    endpoint: Url,
    access_token: String,
}

impl LineClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self, ReplyError> {
        let endpoint = config.api_base.join("/v2/bot/message/reply")?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            access_token: config.channel_access_token.clone(),
        })
    }
}

#[async_trait]
impl ReplySender for LineClient {
    async fn send_reply(
        &self,
        reply_token: &str,
        messages: &[OutboundMessage],
    ) -> Result<ReplyStatus, ReplyError> {
        let request = ReplyRequest {
            reply_token: reply_token.to_string(),
            messages: messages.to_vec(),
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        info!(
            status = status,
            body_length = body.len(),
            "reply_request_complete"
        );

        Ok(ReplyStatus { status, body })
    }
}
