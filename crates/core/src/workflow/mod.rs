//! Report approval workflow.
//!
//! This module implements the draft → submitted → approved/rejected
//! lifecycle shared by daily reports, contract performance reports, and
//! information receipt forms.
//!
//! # Modules
//!
//! - `types` - Workflow domain types (ReportStatus, WorkflowAction)
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::{ReportKind, ReportStatus, WorkflowAction};
