pub mod client;

pub use client::AppsScriptClient;
