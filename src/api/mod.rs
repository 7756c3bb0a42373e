pub mod apps_script;
pub mod client;
pub mod error;
pub mod google_forms;
pub mod rate_limiter;

pub use apps_script::AppsScriptClient;
pub use client::{ContactSink, RateLimitConfig, SubmitReceipt};
pub use error::ApiError;
pub use google_forms::GoogleFormsClient;
pub use rate_limiter::RateLimiter;
