use async_trait::async_trait;

use crate::api::{
    client::{ContactSink, RateLimitConfig, SubmitReceipt},
    error::ApiError,
    rate_limiter::RateLimiter,
};
use crate::models::ContactRecord;

use super::mapper::{map_record_to_entries, FormFieldMap};

/// Form the production deployment collects responses into
const DEFAULT_FORM_ID: &str = "1FAIpQLSdPoqhngYi6z8AUF9k_8QAEc2HIlyihWViA-1-5MxvLf6yYpg";

/// Sink that posts the record URL-encoded to a Google Forms
/// formResponse endpoint.
pub struct GoogleFormsClient {
    form_id: String,
    fields: FormFieldMap,
    http_client: reqwest::Client,
    rate_limiter: RateLimiter,
}

impl GoogleFormsClient {
    pub fn new(form_id: impl Into<String>, fields: FormFieldMap) -> Self {
        let rate_limiter = RateLimiter::new(RateLimitConfig {
            submissions_per_minute: 30,
            burst_size: 5,
        });

        Self {
            form_id: form_id.into(),
            fields,
            http_client: reqwest::Client::new(),
            rate_limiter,
        }
    }

    fn form_response_url(&self) -> String {
        format!(
            "https://docs.google.com/forms/d/e/{}/formResponse",
            self.form_id
        )
    }
}

impl Default for GoogleFormsClient {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_ID, FormFieldMap::default())
    }
}

#[async_trait]
impl ContactSink for GoogleFormsClient {
    fn sink_name(&self) -> &str {
        "google-forms"
    }

    async fn submit(&self, record: &ContactRecord) -> Result<SubmitReceipt, ApiError> {
        record.validate().map_err(ApiError::InvalidRecord)?;

        self.rate_limiter.acquire().await;

        let entries = map_record_to_entries(record, &self.fields);
        let response = self
            .http_client
            .post(self.form_response_url())
            .form(&entries)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ApiError::RateLimitError(
                "Endpoint throttled the submission. Retry later.".to_string(),
            ));
        }

        // Forms answers the confirmation page on success and may bounce
        // through a redirect first; 401/403 means the form stopped
        // accepting responses
        if !(status.is_success() || status.is_redirection()) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Google Forms rejected submission: {} - {}", status, body);
            return Err(ApiError::EndpointError {
                status: status.as_u16(),
                message: body,
            });
        }

        log::info!("Contact record accepted by google-forms ({})", status);

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
