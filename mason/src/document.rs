//! Mason+JSON document model
//!
//! Mason wraps plain JSON resources with `@controls` (hypermedia links and
//! affordances), `@namespaces` and, for failures, an `@error` object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// A named link or affordance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Control {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// JSON schema of the body this control accepts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl Control {
    /// HTTP method of the control; Mason defaults to GET.
    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or("GET")
    }

    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }
}

/// A single resource: its controls plus every other property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MasonItem {
    #[serde(rename = "@controls", default)]
    pub controls: HashMap<String, Control>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MasonItem {
    pub fn control(&self, rel: &str) -> Option<&Control> {
        self.controls.get(rel)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// The resource properties as a JSON object, without Mason meta keys.
    pub fn data(&self) -> Value {
        let data: Map<String, Value> = self
            .fields
            .iter()
            .filter(|(key, _)| !key.starts_with('@'))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Value::Object(data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MasonCollection {
    #[serde(default)]
    pub items: Vec<MasonItem>,
    #[serde(rename = "@controls", default)]
    pub controls: HashMap<String, Control>,
}

impl MasonCollection {
    pub fn control(&self, rel: &str) -> Option<&Control> {
        self.controls.get(rel)
    }
}

/// The `@error` object of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MasonError {
    #[serde(rename = "@message")]
    pub message: String,
    #[serde(rename = "@messages", default)]
    pub messages: Vec<String>,
}

impl MasonError {
    /// Extracts a human readable error from a response body.
    ///
    /// Understands Mason `@error` envelopes and plain `{"message": ...}` bodies.
    pub fn from_body(body: &Value) -> Option<Self> {
        if let Some(error) = body.get("@error") {
            return serde_json::from_value(error.clone()).ok();
        }
        body.get("message").and_then(Value::as_str).map(|message| Self {
            message: message.to_string(),
            messages: Vec::new(),
        })
    }
}

impl fmt::Display for MasonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details: Vec<&str> = self
            .messages
            .iter()
            .map(String::as_str)
            .filter(|m| !m.is_empty())
            .collect();
        if details.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.message, details.join("; "))
        }
    }
}
