//! Typed access to a parsed front matter mapping.
//!
//! Every getter answers with a [`Field`] so that field checks share one shape:
//! the key is absent, the key holds the expected type, or it holds something
//! else.

use serde_yaml::{Mapping, Value};
use std::fmt;

/// Tri-state result of looking up a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Present(T),
    Absent,
    WrongType,
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::WrongType => None,
        }
    }
}

/// The front matter block could not be read as a mapping.
#[derive(Debug)]
pub enum RecordError {
    Yaml(serde_yaml::Error),
    NotAMapping(&'static str),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Yaml(e) => write!(f, "{}", e),
            RecordError::NotAMapping(found) => write!(f, "expected a mapping, found {}", found),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Yaml(e) => Some(e),
            RecordError::NotAMapping(_) => None,
        }
    }
}

/// A front matter mapping with string-keyed typed getters.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: Mapping,
}

impl RawRecord {
    /// Parse a YAML block. An empty block yields an empty record.
    pub fn parse(block: &str) -> Result<Self, RecordError> {
        let value: Value = serde_yaml::from_str(block).map_err(RecordError::Yaml)?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(fields) => Ok(Self { fields }),
            other => Err(RecordError::NotAMapping(kind_of(&other))),
        }
    }

    /// Raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value for `key`.
    pub fn string(&self, key: &str) -> Field<&str> {
        match self.get(key) {
            None => Field::Absent,
            Some(Value::String(s)) => Field::Present(s.as_str()),
            Some(_) => Field::WrongType,
        }
    }

    /// Mapping value for `key` whose keys are all strings, in document order.
    pub fn string_map(&self, key: &str) -> Field<Vec<(&str, &Value)>> {
        match self.get(key) {
            None => Field::Absent,
            Some(Value::Mapping(map)) => {
                let mut entries = Vec::with_capacity(map.len());
                for (k, v) in map {
                    match k {
                        Value::String(name) => entries.push((name.as_str(), v)),
                        _ => return Field::WrongType,
                    }
                }
                Field::Present(entries)
            }
            Some(_) => Field::WrongType,
        }
    }
}

/// Sequence items of `value`, or `None` when it is not a sequence.
pub fn sequence(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Sequence(items) => Some(items.as_slice()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
