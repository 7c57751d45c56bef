//! Common payload types for the shared crate

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a partial-update payload
///
/// - `Missing`: key absent from the body, keep the stored value
/// - `Null`: key present with `null`, store NULL
/// - `Value`: key present with a value, store it
///
/// Struct fields must carry `#[serde(default)]` so an absent key
/// resolves to `Missing`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldPatch<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> FieldPatch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Resolve against the currently stored value
    pub fn resolve(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Missing => current,
            Self::Null => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldPatch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Absent keys never reach here; they take the `Default`
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}

impl<T: Serialize> Serialize for FieldPatch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

/// Price as sent by clients: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Normalize into the stored text form
    ///
    /// Empty text maps to `None` (stored as NULL). Anything that is not a
    /// finite number is rejected with a message suitable for a 400.
    pub fn into_stored(self) -> Result<Option<String>, String> {
        match self {
            Self::Number(n) if n.is_finite() => Ok(Some(n.to_string())),
            Self::Number(n) => Err(format!("Invalid price: {}", n)),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(Some(trimmed.to_string())),
                    _ => Err(format!("Invalid price: {}", s)),
                }
            }
        }
    }
}
