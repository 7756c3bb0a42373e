pub mod api;
pub mod calculator;
pub mod models;
pub mod report;

pub use api::{ApiError, AppsScriptClient, ContactSink, GoogleFormsClient, SubmitReceipt};
pub use calculator::{compute_metrics, target_for};
pub use models::{
    leverage_options, ContactRecord, DerivedMetrics, Direction, TradeForm, TradeInput,
};
pub use report::{build_result_rows, copy_all, target_lines, ResultRow};
