use formdiff_core_types::FieldId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of a form field
///
/// The set is closed: the form builder only ever creates these kinds.
/// Serialized in SCREAMING_SNAKE_CASE (`"FILE_UPLOAD"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Phone,
    Url,
    Number,
    Date,
    Time,
    Radio,
    Checkbox,
    Dropdown,
    Matrix,
    Table,
    Rating,
    Scale,
    FileUpload,
    Signature,
    Section,
}

impl FieldType {
    /// Every field kind, in declaration order
    pub const ALL: [FieldType; 18] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Url,
        FieldType::Number,
        FieldType::Date,
        FieldType::Time,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Dropdown,
        FieldType::Matrix,
        FieldType::Table,
        FieldType::Rating,
        FieldType::Scale,
        FieldType::FileUpload,
        FieldType::Signature,
        FieldType::Section,
    ];

    /// Wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Textarea => "TEXTAREA",
            FieldType::Email => "EMAIL",
            FieldType::Phone => "PHONE",
            FieldType::Url => "URL",
            FieldType::Number => "NUMBER",
            FieldType::Date => "DATE",
            FieldType::Time => "TIME",
            FieldType::Radio => "RADIO",
            FieldType::Checkbox => "CHECKBOX",
            FieldType::Dropdown => "DROPDOWN",
            FieldType::Matrix => "MATRIX",
            FieldType::Table => "TABLE",
            FieldType::Rating => "RATING",
            FieldType::Scale => "SCALE",
            FieldType::FileUpload => "FILE_UPLOAD",
            FieldType::Signature => "SIGNATURE",
            FieldType::Section => "SECTION",
        }
    }

    /// Parse a wire name
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Whether this kind offers a list of selectable options
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FieldType::Radio | FieldType::Checkbox | FieldType::Dropdown
        )
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` of a field as found in a snapshot
///
/// Snapshots written by a newer builder may carry kinds this build does not
/// know. Those fields are kept and diffed literally instead of failing the
/// whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldKind {
    Known(FieldType),
    Unknown(String),
}

impl FieldKind {
    /// Wire name, known or not
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Known(ty) => ty.as_str(),
            FieldKind::Unknown(name) => name,
        }
    }

    /// The recognized kind, if any
    pub fn known(&self) -> Option<FieldType> {
        match self {
            FieldKind::Known(ty) => Some(*ty),
            FieldKind::Unknown(_) => None,
        }
    }
}

impl From<FieldType> for FieldKind {
    fn from(ty: FieldType) -> Self {
        FieldKind::Known(ty)
    }
}

impl PartialEq<FieldType> for FieldKind {
    fn eq(&self, other: &FieldType) -> bool {
        self.known() == Some(*other)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form field as it existed at one instant
///
/// Type-specific settings (`validation`, `options`, ...) live in
/// `properties`, which is flattened next to the fixed attributes on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    /// Stable identity; `None` only for malformed input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FieldId>,

    #[serde(rename = "type")]
    pub field_type: FieldKind,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub required: bool,

    /// Position on the canvas; never diffed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// Parent group, if the field sits inside one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl FieldSnapshot {
    /// Create a field with no type-specific properties
    pub fn new(
        id: impl Into<FieldId>,
        field_type: impl Into<FieldKind>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            field_type: field_type.into(),
            label: label.into(),
            required: false,
            order: None,
            group_id: None,
            properties: Map::new(),
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Set a top-level type-specific property (`validation`, `options`, ...)
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Flatten the field into the property map the differ walks.
    ///
    /// Fixed attributes win over same-named entries in `properties`.
    /// `id` and `order` are left out; they are never diffed.
    pub fn to_property_map(&self) -> Map<String, Value> {
        let mut map = self.properties.clone();
        map.insert(
            "type".to_string(),
            Value::String(self.field_type.as_str().to_string()),
        );
        map.insert("label".to_string(), Value::String(self.label.clone()));
        map.insert("required".to_string(), Value::Bool(self.required));
        map.insert(
            "groupId".to_string(),
            self.group_id
                .as_ref()
                .map(|g| Value::String(g.clone()))
                .unwrap_or(Value::Null),
        );
        map
    }
}

/// Lightweight reference to a field, carried by update entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRef {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldKind,
    pub label: String,
}

impl FieldRef {
    /// Build a reference from a field known to carry an id
    pub fn new(id: FieldId, field: &FieldSnapshot) -> Self {
        Self {
            id,
            field_type: field.field_type.clone(),
            label: field.label.clone(),
        }
    }
}
