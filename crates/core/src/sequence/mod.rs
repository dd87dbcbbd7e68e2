//! "#" line numbering for order, request, and stock move lines.
//!
//! # Modules
//!
//! - `types` - Line models and numbered lines
//! - `service` - Numbering and cleanup rules

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::SequenceService;
pub use types::{LineModel, OrderLine};
