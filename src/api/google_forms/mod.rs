pub mod client;
pub mod mapper;

pub use client::GoogleFormsClient;
pub use mapper::{map_record_to_entries, FormFieldMap};
