//! Schema to form, data to form, form to payload

use serde_json::{Map, Value};

use super::model::FormModel;
use super::schema::FormSchema;

/// Builds an empty form for `schema`, submitted to `target_url`.
pub fn build_form(schema: &Value, target_url: &str) -> FormModel {
    FormModel::new(target_url, FormSchema::from_json(schema))
}

/// Fills the form with the truthy values of `data`.
///
/// Falsy values (`""`, `0`, `false`, `null`) keep the field at its current
/// value. A subform whose key is missing from `data` stays unset.
pub fn populate(mut form: FormModel, data: &Value) -> FormModel {
    let schema = form.schema().clone();

    for field in &schema.fields {
        if let Some(value) = data.get(&field.name).filter(|v| is_truthy(v)) {
            form.set_value(&field.name, value.clone());
        }
    }

    for subform in &schema.subforms {
        let Some(nested) = data.get(&subform.name).and_then(Value::as_object) else {
            continue;
        };
        for field in &subform.fields {
            if let Some(value) = nested.get(&field.name).filter(|v| is_truthy(v)) {
                form.set_subform_value(&subform.name, &field.name, value.clone());
            }
        }
    }

    form
}

/// Collects the form into a submission payload.
///
/// Unset fields serialize as empty strings, as an untouched text input would.
pub fn serialize(form: &FormModel) -> Value {
    let schema = form.schema();
    let mut envelope = Map::new();

    for field in &schema.fields {
        envelope.insert(field.name.clone(), value_or_empty(form.value(&field.name)));
    }

    for subform in &schema.subforms {
        let nested: Map<String, Value> = subform
            .fields
            .iter()
            .map(|field| {
                let value = form.subform_value(&subform.name, &field.name);
                (field.name.clone(), value_or_empty(value))
            })
            .collect();
        envelope.insert(subform.name.clone(), Value::Object(nested));
    }

    Value::Object(envelope)
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_or_empty(value: Option<&Value>) -> Value {
    value.cloned().unwrap_or_else(|| Value::String(String::new()))
}

impl FormModel {
    pub fn serialize(&self) -> Value {
        serialize(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
