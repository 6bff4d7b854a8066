//! Consumer complaint form
//!
//! This library holds the client side of the complaint form: the five-field
//! validator, the submission controller that tracks in-flight state and the
//! status line, and an HTTP client for the complaint service's
//! `POST /send-complaint` endpoint.
//!
//! # Modules
//!
//! - `models`: the form input and the tagged status message
//! - `services::validation`: per-field validation rules
//! - `services::submission`: reducer-style form state and the async driver
//! - `client`: `ComplaintTransport` and its reqwest implementation
//! - `error`: submission and configuration errors

pub mod client;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod client_mock;
#[cfg(test)]
mod tests;

// Re-export the main API types for ease of use
pub use client::{ClientConfig, ComplaintClient, ComplaintTransport};
pub use error::{ConfigError, SubmitError};
pub use models::complaint::{ComplaintInput, Field};
pub use models::status::{StatusKind, StatusMessage, SubmitReceipt};
pub use services::submission::{ComplaintForm, FormModel, FORM_TITLE};
pub use services::validation::{validate, ValidationErrors};
