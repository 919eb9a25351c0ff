//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_FIELD_ID: &str = "field_id";
pub const FIELD_RULE_ID: &str = "rule_id";
pub const FIELD_PROPERTY: &str = "property";

// Collection sizes
pub const FIELD_ADDED_FIELDS: &str = "added_fields";
pub const FIELD_DELETED_FIELDS: &str = "deleted_fields";
pub const FIELD_UPDATED_FIELDS: &str = "updated_fields";
pub const FIELD_SETTINGS_CHANGES: &str = "settings_changes";
pub const FIELD_LOGIC_CHANGES: &str = "logic_changes";
pub const FIELD_SKIPPED_ITEMS: &str = "skipped_items";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
