//! Snapshot model: the shapes the diff engine reads.

pub mod field;
pub mod form;
pub mod logic;

pub use field::{FieldKind, FieldRef, FieldSnapshot, FieldType};
pub use form::FormSnapshot;
pub use logic::{Action, Condition, LogicRuleSnapshot, LogicType, RuleRef};
