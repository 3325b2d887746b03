//! Types for the product catalog.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// A product record read from the catalog tree.
///
/// Records are loosely typed: every recognized field is optional, and a
/// recognized field holding an unexpected JSON type is left in `extra`
/// instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub featured: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub popular: bool,
    /// Everything else (image, sizes, description, ...), passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Product {
    /// Build a product from a parsed JSON value.
    ///
    /// Returns `None` for anything that is not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };

        Some(Self {
            id: take(&mut fields, "id", as_string),
            name: take(&mut fields, "name", as_string),
            brand: take(&mut fields, "brand", as_string),
            model: take(&mut fields, "model", as_string),
            price: take(&mut fields, "price", as_number),
            gender: take(&mut fields, "gender", Gender::from_value),
            hidden: take(&mut fields, "hidden", Value::as_bool).unwrap_or(false),
            featured: take(&mut fields, "featured", Value::as_bool).unwrap_or(false),
            popular: take(&mut fields, "popular", Value::as_bool).unwrap_or(false),
            extra: fields,
        })
    }

    /// A pass-through string field such as `image` or `description`.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Product::from_value(value)
            .ok_or_else(|| serde::de::Error::custom("product record must be a JSON object"))
    }
}

/// Remove `key` from `fields` only when `convert` accepts its value.
fn take<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let converted = fields.get(key).and_then(convert)?;
    fields.remove(key);
    Some(converted)
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}

/// Target audience of a product: a single label or a list of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Gender {
    One(String),
    Many(Vec<String>),
}

impl Gender {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Gender::One(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(Gender::Many),
            _ => None,
        }
    }

    /// All labels, whichever shape the record used.
    pub fn labels(&self) -> &[String] {
        match self {
            Gender::One(label) => std::slice::from_ref(label),
            Gender::Many(labels) => labels,
        }
    }

    /// Case-insensitive substring match against any label.
    pub fn contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.labels()
            .iter()
            .any(|label| label.to_lowercase().contains(&needle))
    }
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
