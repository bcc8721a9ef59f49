//! Editable form state bound to a submission URL

use serde_json::Value;
use std::collections::HashMap;

use super::schema::{FieldSchema, FormSchema};

/// Form built from a control schema.
///
/// Values are only ever stored for declared fields, so the schema stays the
/// authoritative field set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormModel {
    action: String,
    schema: FormSchema,
    values: HashMap<String, Value>,
    subform_values: HashMap<String, HashMap<String, Value>>,
}

impl FormModel {
    pub fn new(action: impl Into<String>, schema: FormSchema) -> Self {
        Self {
            action: action.into(),
            schema,
            values: HashMap::new(),
            subform_values: HashMap::new(),
        }
    }

    /// Target URL of the submission.
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.schema.fields
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn subform_value(&self, subform: &str, name: &str) -> Option<&Value> {
        self.subform_values.get(subform).and_then(|values| values.get(name))
    }

    /// Sets a top-level field. Returns `false` for undeclared fields.
    pub fn set_value(&mut self, name: &str, value: Value) -> bool {
        if self.schema.field(name).is_none() {
            tracing::debug!(field = name, "Ignoring value for undeclared field");
            return false;
        }
        self.values.insert(name.to_string(), value);
        true
    }

    /// Sets a field of a subform. Returns `false` for undeclared fields.
    pub fn set_subform_value(&mut self, subform: &str, name: &str, value: Value) -> bool {
        let declared = self
            .schema
            .subform(subform)
            .is_some_and(|s| s.field(name).is_some());
        if !declared {
            tracing::debug!(subform, field = name, "Ignoring value for undeclared subform field");
            return false;
        }
        self.subform_values
            .entry(subform.to_string())
            .or_default()
            .insert(name.to_string(), value);
        true
    }

    /// Drops every value, leaving the form as freshly built.
    pub fn clear_values(&mut self) {
        self.values.clear();
        self.subform_values.clear();
    }

    /// Names of required fields that have no value or an empty string.
    pub fn missing_required(&self) -> Vec<&str> {
        self.schema
            .fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| match self.values.get(&f.name) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(_) => false,
            })
            .map(|f| f.name.as_str())
            .collect()
    }
}
