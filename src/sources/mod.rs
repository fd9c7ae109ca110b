//! Data fetch gateway: GraphQL documents, HTTP client and error taxonomy.

mod client;
mod error;
pub mod graphql;

pub use client::CatalogClient;
pub use error::FetchError;
pub use graphql::{decode_records, decode_types, records_request_body};
