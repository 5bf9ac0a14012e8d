pub mod client;
pub mod error;

pub use client::AirtableClient;
pub use error::AirtableError;
