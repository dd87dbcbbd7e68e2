//! Core business rules for ERPVN.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Record storage belongs to the host ERP; these services compute display
//! fields and validate state changes on values it hands over.
//!
//! # Modules
//!
//! - `amount_words` - Vietnamese amount-in-words rendering
//! - `sequence` - "#" line numbering for order and stock lines
//! - `validation` - Tier validation counters for purchase requests
//! - `workflow` - Report approval state machine
//! - `report` - Report naming, date rules, and housekeeping

pub mod amount_words;
pub mod report;
pub mod sequence;
pub mod validation;
pub mod workflow;
