//! Network layer - the one GET request and its failure taxonomy

pub mod client;
pub mod error;

pub use client::{Fetcher, HttpFetcher};
pub use error::FetchError;
