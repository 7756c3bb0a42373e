pub mod contact;
pub mod metrics;
pub mod trade;

pub use contact::*;
pub use metrics::*;
pub use trade::*;
