//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Entity identifiers
pub const FIELD_ELEMENT_ID: &str = "element_id";
pub const FIELD_ELEMENT_KIND: &str = "element_kind";
pub const FIELD_TYPE_ID: &str = "type_id";
pub const FIELD_FEATURE_ID: &str = "feature_id";
pub const FIELD_RELATIONSHIP_ID: &str = "relationship_id";
pub const FIELD_PACKAGE_ID: &str = "package_id";

// Collection sizes
pub const FIELD_ELEMENT_COUNT: &str = "element_count";
pub const FIELD_ISSUE_COUNT: &str = "issue_count";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
