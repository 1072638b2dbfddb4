pub mod catalog;
pub mod client;

pub use catalog::MovieCatalog;
pub use client::{ApiClient, ApiRequest, JsonSource};
