//! Report records: naming, date rules, daily planning, and draft cleanup.
//!
//! # Modules
//!
//! - `types` - The report record and its workflow operations
//! - `naming` - Default and display names
//! - `service` - Date constraints, planning, and housekeeping
//! - `error` - Report validation errors

pub mod error;
pub mod naming;
pub mod service;
pub mod types;

pub use error::ReportError;
pub use naming::{NEW_NAME, build_default_name, display_name};
pub use service::{DEFAULT_DRAFT_RETENTION_DAYS, ReportService};
pub use types::Report;
