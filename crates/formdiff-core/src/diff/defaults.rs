//! Defaults table: the one place documented defaults live.
//!
//! The table has two parts:
//!
//! - **defaults**: `(scope, path) -> value`. When a property is absent or
//!   `null`, the normalizer substitutes the registered value before
//!   comparing, so "absent" and "explicitly set to the default" are equal.
//! - **keyed collections**: `(field type, path)` pairs naming array
//!   properties whose elements carry their own `id` and are reconciled by
//!   id instead of compared wholesale.
//!
//! The built-in table is versioned. Deployments can overlay a JSON document
//! of the same shape:
//!
//! ```json
//! {
//!   "version": 1,
//!   "defaults": [{"scope": "DATE", "path": "validation.dateFormat", "value": "MM-DD-YYYY"}],
//!   "keyedCollections": [{"fieldType": "MATRIX", "path": "options.rows"}]
//! }
//! ```
//!
//! Scopes are a field type wire name, `@settings` or `@logic`.

use crate::errors::{FormDiffError, Result};
use crate::model::FieldType;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Table document version understood by this build
pub const DEFAULTS_TABLE_VERSION: u32 = 1;

const SETTINGS_SCOPE: &str = "@settings";
const LOGIC_SCOPE: &str = "@logic";

/// Where a default applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefaultScope {
    /// Properties of fields of one type, relative to the field root
    Field(FieldType),
    /// Top-level form settings
    Settings,
    /// Logic rule attributes
    LogicRule,
}

impl From<DefaultScope> for String {
    fn from(scope: DefaultScope) -> Self {
        match scope {
            DefaultScope::Field(ty) => ty.as_str().to_string(),
            DefaultScope::Settings => SETTINGS_SCOPE.to_string(),
            DefaultScope::LogicRule => LOGIC_SCOPE.to_string(),
        }
    }
}

impl TryFrom<String> for DefaultScope {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        match s.as_str() {
            SETTINGS_SCOPE => Ok(DefaultScope::Settings),
            LOGIC_SCOPE => Ok(DefaultScope::LogicRule),
            other => FieldType::from_wire(other)
                .map(DefaultScope::Field)
                .ok_or_else(|| format!("unknown default scope '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DefaultEntry {
    scope: DefaultScope,
    path: String,
    value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyedCollectionEntry {
    field_type: FieldType,
    path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsDocument {
    version: u32,
    #[serde(default)]
    defaults: Vec<DefaultEntry>,
    #[serde(default)]
    keyed_collections: Vec<KeyedCollectionEntry>,
}

/// Side-table of documented defaults and keyed child collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefaultsDocument", into = "DefaultsDocument")]
pub struct DefaultsTable {
    version: u32,
    defaults: BTreeMap<(DefaultScope, String), Value>,
    keyed: BTreeSet<(FieldType, String)>,
}

impl DefaultsTable {
    /// An empty table: nothing is normalized, every array is opaque
    pub fn empty() -> Self {
        Self {
            version: DEFAULTS_TABLE_VERSION,
            defaults: BTreeMap::new(),
            keyed: BTreeSet::new(),
        }
    }

    /// The documented defaults shipped with the form builder
    pub fn builtin() -> Self {
        let mut table = Self::empty();

        let date = DefaultScope::Field(FieldType::Date);
        table.set_default(date, "validation.dateFormat", json!("MM-DD-YYYY"));
        table.set_default(date, "validation.limitTime", json!("BOTH"));

        table.set_default(
            DefaultScope::Field(FieldType::Textarea),
            "options.rows",
            json!(4),
        );

        let rating = DefaultScope::Field(FieldType::Rating);
        table.set_default(rating, "options.maxRating", json!(5));
        table.set_default(rating, "options.shape", json!("STAR"));

        let scale = DefaultScope::Field(FieldType::Scale);
        table.set_default(scale, "options.min", json!(1));
        table.set_default(scale, "options.max", json!(10));

        table.set_default(
            DefaultScope::Field(FieldType::FileUpload),
            "validation.maxFiles",
            json!(1),
        );

        table.set_default(DefaultScope::Settings, "isQuiz", json!(false));
        table.set_default(DefaultScope::LogicRule, "logicType", json!("MATCH_ALL"));

        for ty in FieldType::ALL.iter().filter(|t| t.is_choice()) {
            table.add_keyed_collection(*ty, "options.items");
        }
        table.add_keyed_collection(FieldType::Matrix, "options.rows");
        table.add_keyed_collection(FieldType::Matrix, "options.columns");
        table.add_keyed_collection(FieldType::Table, "options.columns");

        table
    }

    /// Parse a table document.
    ///
    /// # Errors
    ///
    /// `InvalidDefaults` if the bytes are not a valid table document,
    /// `UnsupportedDefaultsVersion` if the document version is unknown.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let doc: DefaultsDocument =
            serde_json::from_slice(bytes).map_err(|e| FormDiffError::InvalidDefaults {
                message: e.to_string(),
            })?;
        if doc.version != DEFAULTS_TABLE_VERSION {
            return Err(FormDiffError::UnsupportedDefaultsVersion {
                version: doc.version,
            });
        }
        DefaultsTable::try_from(doc).map_err(|message| FormDiffError::InvalidDefaults { message })
    }

    /// The built-in table overlaid with a document.
    ///
    /// # Errors
    ///
    /// Same as [`DefaultsTable::from_json`].
    pub fn builtin_with_overrides(bytes: &[u8]) -> Result<Self> {
        let overrides = Self::from_json(bytes)?;
        let mut table = Self::builtin();
        table.merge(&overrides);
        Ok(table)
    }

    /// Overlay another table; its entries win on conflict
    pub fn merge(&mut self, other: &DefaultsTable) {
        for (key, value) in &other.defaults {
            self.defaults.insert(key.clone(), value.clone());
        }
        for key in &other.keyed {
            self.keyed.insert(key.clone());
        }
    }

    pub fn set_default(&mut self, scope: DefaultScope, path: impl Into<String>, value: Value) {
        self.defaults.insert((scope, path.into()), value);
    }

    pub fn add_keyed_collection(&mut self, field_type: FieldType, path: impl Into<String>) {
        self.keyed.insert((field_type, path.into()));
    }

    /// Registered default for a property, if any
    pub fn default_for(&self, scope: DefaultScope, path: &str) -> Option<&Value> {
        self.defaults.get(&(scope, path.to_string()))
    }

    /// Whether `path` on fields of `field_type` is reconciled by child id
    pub fn is_keyed_collection(&self, field_type: FieldType, path: &str) -> bool {
        self.keyed.contains(&(field_type, path.to_string()))
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of registered defaults
    pub fn default_count(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.keyed.is_empty()
    }
}

impl Default for DefaultsTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<DefaultsDocument> for DefaultsTable {
    type Error = String;

    fn try_from(doc: DefaultsDocument) -> std::result::Result<Self, Self::Error> {
        if doc.version != DEFAULTS_TABLE_VERSION {
            return Err(format!("unsupported version {}", doc.version));
        }
        let mut table = Self::empty();
        for entry in doc.defaults {
            if entry.path.is_empty() {
                return Err("default entry with empty path".to_string());
            }
            table.set_default(entry.scope, entry.path, entry.value);
        }
        for entry in doc.keyed_collections {
            if entry.path.is_empty() {
                return Err("keyed collection entry with empty path".to_string());
            }
            table.add_keyed_collection(entry.field_type, entry.path);
        }
        Ok(table)
    }
}

impl From<DefaultsTable> for DefaultsDocument {
    fn from(table: DefaultsTable) -> Self {
        DefaultsDocument {
            version: table.version,
            defaults: table
                .defaults
                .into_iter()
                .map(|((scope, path), value)| DefaultEntry { scope, path, value })
                .collect(),
            keyed_collections: table
                .keyed
                .into_iter()
                .map(|(field_type, path)| KeyedCollectionEntry { field_type, path })
                .collect(),
        }
    }
}
