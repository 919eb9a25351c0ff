use formdiff_core_types::{FieldId, RuleId};
use thiserror::Error;

/// Result type alias using FormDiffError
pub type Result<T> = std::result::Result<T, FormDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that crosses a byte boundary (snapshot parsing, defaults table
/// loading, CLI I/O) is classified by one of these kinds. Each kind maps to a
/// stable error code usable in tests and external tooling.
///
/// The diff computation itself never fails; these kinds only describe the
/// code around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    MissingField,

    // Snapshot / table parsing
    /// Snapshot bytes are not UTF-8 JSON or do not match the snapshot shape
    InvalidSnapshot,
    /// A defaults table document could not be loaded
    InvalidDefaults,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::InvalidDefaults => "ERR_INVALID_DEFAULTS",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context about where in the form
/// the problem was found.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field_id: Option<FieldId>,
    rule_id: Option<RuleId>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field_id: None,
            rule_id: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add field ID context
    pub fn with_field_id(mut self, id: FieldId) -> Self {
        self.field_id = Some(id);
        self
    }

    /// Add rule ID context
    pub fn with_rule_id(mut self, id: RuleId) -> Self {
        self.rule_id = Some(id);
        self
    }

    /// Add file or property path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the field ID context, if any
    pub fn field_id(&self) -> Option<&FieldId> {
        self.field_id.as_ref()
    }

    /// Get the rule ID context, if any
    pub fn rule_id(&self) -> Option<&RuleId> {
        self.rule_id.as_ref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field_id) = &self.field_id {
            write!(f, " (field_id: {})", field_id)?;
        }
        if let Some(rule_id) = &self.rule_id {
            write!(f, " (rule_id: {})", rule_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for formdiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormDiffError {
    /// Snapshot bytes are not valid UTF-8
    #[error("Snapshot is not valid UTF-8: {message}")]
    SnapshotNotUtf8 { message: String },

    /// Snapshot text is not valid JSON
    #[error("Snapshot is not valid JSON: {message}")]
    SnapshotNotJson { message: String },

    /// Snapshot JSON root is not an object
    #[error("Snapshot JSON root must be an object")]
    SnapshotNotObject,

    /// Snapshot JSON does not match the snapshot shape
    #[error("Snapshot does not match the expected shape: {message}")]
    SnapshotShape { message: String },

    /// Defaults table document could not be parsed
    #[error("Invalid defaults table: {message}")]
    InvalidDefaults { message: String },

    /// Defaults table declares a version this build does not understand
    #[error("Unsupported defaults table version {version}")]
    UnsupportedDefaultsVersion { version: u32 },

    /// Required field absent from an input document
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File could not be read or written
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from FormDiffError to ExError
impl From<FormDiffError> for ExError {
    fn from(err: FormDiffError) -> Self {
        let message = err.to_string();
        match err {
            FormDiffError::SnapshotNotUtf8 { .. }
            | FormDiffError::SnapshotNotJson { .. }
            | FormDiffError::SnapshotNotObject
            | FormDiffError::SnapshotShape { .. } => {
                ExError::new(ExErrorKind::InvalidSnapshot).with_message(message)
            }

            FormDiffError::InvalidDefaults { .. }
            | FormDiffError::UnsupportedDefaultsVersion { .. } => {
                ExError::new(ExErrorKind::InvalidDefaults).with_message(message)
            }

            FormDiffError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_path(field)
                .with_message(message),

            FormDiffError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            FormDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            FormDiffError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to FormDiffError
impl From<serde_json::Error> for FormDiffError {
    fn from(err: serde_json::Error) -> Self {
        FormDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from std::io::Error to FormDiffError
impl From<std::io::Error> for FormDiffError {
    fn from(err: std::io::Error) -> Self {
        FormDiffError::Io {
            message: err.to_string(),
        }
    }
}
