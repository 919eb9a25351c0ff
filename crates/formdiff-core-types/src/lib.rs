//! Core types shared across formdiff facilities
//!
//! This crate provides foundational types used by the diff engine,
//! the error facility and the logging facility:
//!
//! - **Identity types**: FieldId, RuleId
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{FieldId, RuleId};
