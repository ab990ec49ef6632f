use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::StreamError;

/// A single message attribute value.
///
/// Attributes travel as loosely typed metadata next to the message body, so
/// every recognized value carries an explicit coercion instead of a runtime
/// type assertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl AttributeValue {
    /// Coerces the value to an `i32`, accepting integers in range and strings
    /// holding a decimal number.
    #[must_use]
    pub fn coerce_i32(&self) -> Option<i32> {
        match self {
            AttributeValue::Int(value) => i32::try_from(*value).ok(),
            AttributeValue::String(value) => value.trim().parse().ok(),
            AttributeValue::Bool(_) => None,
        }
    }

    /// Coerces the value to a string.
    #[must_use]
    pub fn coerce_string(&self) -> Option<String> {
        match self {
            AttributeValue::String(value) => Some(value.clone()),
            AttributeValue::Int(value) => Some(value.to_string()),
            AttributeValue::Bool(value) => Some(value.to_string()),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(value) => write!(f, "{value}"),
            AttributeValue::Int(value) => write!(f, "{value}"),
            AttributeValue::String(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(i64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

/// An application message the output knows how to deliver.
pub trait WritableMessage {
    /// Metadata mapping attached to the message. Delivery options are read
    /// from here; unrecognized keys are ignored.
    fn attributes(&self) -> &HashMap<String, AttributeValue>;

    /// Serializes the message into its wire body.
    fn marshal_to_string(&self) -> Result<String, StreamError>;
}

/// Default writable message: a string body plus an attribute map, marshalled
/// as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, AttributeValue>,
    pub body: String,
}

impl Message {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            attributes: HashMap::new(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl WritableMessage for Message {
    fn attributes(&self) -> &HashMap<String, AttributeValue> {
        &self.attributes
    }

    fn marshal_to_string(&self) -> Result<String, StreamError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Delivery options extracted from a message's attributes. Recomputed per
/// message, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryOptions {
    pub delay_seconds: i32,
    pub group_id: Option<String>,
    pub deduplication_id: Option<String>,
}

/// Wire-ready envelope for a single message. Optional fields stay unset when
/// the transport default applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportMessage {
    pub body: String,
    pub delay_seconds: Option<i32>,
    pub group_id: Option<String>,
    pub deduplication_id: Option<String>,
}
