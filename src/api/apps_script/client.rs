use async_trait::async_trait;

use crate::api::{
    client::{ContactSink, RateLimitConfig, SubmitReceipt},
    error::ApiError,
    rate_limiter::RateLimiter,
};
use crate::models::ContactRecord;

/// Web-app deployment the production contact form posts to
const DEFAULT_EXEC_URL: &str =
    "https://script.google.com/macros/s/AKfycbzVi30fB1_2J5k3sqtTO9CmFRzjvQBbLhJ78_5S9zsunhEWE45i6Ls9Q880uxFvnNUg/exec";

/// Sink that posts the record as JSON to a Google Apps Script web app.
pub struct AppsScriptClient {
    exec_url: String,
    http_client: reqwest::Client,
    rate_limiter: RateLimiter,
}

impl AppsScriptClient {
    pub fn new(exec_url: impl Into<String>) -> Self {
        // Apps Script quotas are generous; keep submissions polite anyway
        let rate_limiter = RateLimiter::new(RateLimitConfig {
            submissions_per_minute: 30,
            burst_size: 5,
        });

        Self {
            exec_url: exec_url.into(),
            http_client: reqwest::Client::new(),
            rate_limiter,
        }
    }
}

impl Default for AppsScriptClient {
    fn default() -> Self {
        Self::new(DEFAULT_EXEC_URL)
    }
}

#[async_trait]
impl ContactSink for AppsScriptClient {
    fn sink_name(&self) -> &str {
        "apps-script"
    }

    async fn submit(&self, record: &ContactRecord) -> Result<SubmitReceipt, ApiError> {
        record.validate().map_err(ApiError::InvalidRecord)?;

        self.rate_limiter.acquire().await;

        let response = self
            .http_client
            .post(&self.exec_url)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ApiError::RateLimitError(
                "Endpoint throttled the submission. Retry later.".to_string(),
            ));
        }

        // The exec URL answers 200 directly or redirects to a result
        // page; both mean the row was recorded
        if !(status.is_success() || status.is_redirection()) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Apps Script rejected submission: {} - {}", status, body);
            return Err(ApiError::EndpointError {
                status: status.as_u16(),
                message: body,
            });
        }

        log::info!("Contact record accepted by apps-script ({})", status);

        Ok(SubmitReceipt {
            sink: self.sink_name().to_string(),
            status: status.as_u16(),
        })
    }

    fn rate_limit(&self) -> RateLimitConfig {
        RateLimitConfig {
            submissions_per_minute: 30,
            burst_size: 5,
        }
    }
}
