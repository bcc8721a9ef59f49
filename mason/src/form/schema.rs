//! Core types for schema-driven forms

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of a schema property as far as forms are concerned.
///
/// Every non-object type is edited through a text input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Object,
}

impl FieldType {
    /// Reads the `type` keyword of a property schema.
    pub fn of(property: &Value) -> Self {
        match property.get("type").and_then(Value::as_str) {
            Some("object") => FieldType::Object,
            _ => FieldType::String,
        }
    }
}

/// One editable property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldSchema {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldSchema {
    pub fn from_property(name: &str, property: &Value, required: bool) -> Self {
        Self {
            name: name.to_string(),
            title: property
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            description: property
                .get("description")
                .and_then(Value::as_str)
                .map(String::from),
            field_type: FieldType::of(property),
            required,
        }
    }

    /// Label text: the title (or name when untitled), starred when required.
    pub fn label(&self) -> String {
        let text = if self.title.is_empty() { &self.name } else { &self.title };
        if self.required {
            format!("{}*", text)
        } else {
            text.clone()
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Fields of an object-typed property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subform {
    pub name: String,
    pub title: String,
    pub fields: Vec<FieldSchema>,
}

impl Subform {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Flattened view of a control schema, in property order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSchema>,
    pub subforms: Vec<Subform>,
}

impl FormSchema {
    /// Walks `properties` of a schema fragment.
    ///
    /// A missing or non-object `properties` yields an empty schema, a missing
    /// `required` list marks nothing required. Object properties nested in a
    /// subform are skipped.
    pub fn from_json(schema: &Value) -> Self {
        let mut form = FormSchema::default();
        let Some(properties) = properties_of(schema) else {
            tracing::debug!("Schema has no properties, building an empty form");
            return form;
        };
        let required = required_of(schema);

        for (name, property) in properties {
            match FieldType::of(property) {
                FieldType::Object => form.subforms.push(subform_from_property(name, property)),
                FieldType::String => {
                    let is_required = required.iter().any(|r| r == name);
                    form.fields.push(FieldSchema::from_property(name, property, is_required));
                }
            }
        }

        form
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn subform(&self, name: &str) -> Option<&Subform> {
        self.subforms.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.subforms.is_empty()
    }
}

fn subform_from_property(name: &str, property: &Value) -> Subform {
    let fields = properties_of(property)
        .map(|nested| {
            nested
                .iter()
                // Only one nesting level.
                .filter(|(_, p)| FieldType::of(p) != FieldType::Object)
                // Subform fields are never required, whatever the inner `required` says.
                .map(|(n, p)| FieldSchema::from_property(n, p, false))
                .collect()
        })
        .unwrap_or_default();

    Subform {
        name: name.to_string(),
        title: property
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_string(),
        fields,
    }
}

fn properties_of(schema: &Value) -> Option<&Map<String, Value>> {
    schema.get("properties").and_then(Value::as_object)
}

fn required_of(schema: &Value) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
