use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::models::ContactRecord;

/// Configuration for submission rate limiting
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub submissions_per_minute: u32,
    pub burst_size: u32,
}

/// Acknowledgement for a delivered submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Which sink accepted the record
    pub sink: String,
    /// HTTP status the endpoint answered with
    pub status: u16,
}

/// Core trait all form-collection sinks implement
#[async_trait]
pub trait ContactSink: Send + Sync {
    /// Get the sink name (e.g., "apps-script", "google-forms")
    fn sink_name(&self) -> &str;

    /// Deliver one contact record to the collection endpoint
    async fn submit(&self, record: &ContactRecord) -> Result<SubmitReceipt, ApiError>;

    /// Get rate limit configuration for this sink
    fn rate_limit(&self) -> RateLimitConfig;
}
