//! gym-client library
//!
//! HTTP client for the membership REST API, shared by every console view.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ClientError, ClientResult};
