//! DOM rendering of a [`FormModel`]
//!
//! One labelled text input per field, subforms grouped under a `div.subform`
//! with their title as heading. Every keystroke writes back into the model,
//! so submitting only needs `serialize` on the signal's current value.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;
use tellus_mason::form::{FieldSchema, FormModel};

/// Renders every field of `form` and keeps it updated from user input.
#[component]
pub fn SchemaForm(form: RwSignal<FormModel>) -> impl IntoView {
    let schema = form.with_untracked(|f| f.schema().clone());

    let fields = schema
        .fields
        .into_iter()
        .map(|field| view! { <FieldInput form=form subform=None field=field/> })
        .collect::<Vec<_>>();

    let subforms = schema
        .subforms
        .into_iter()
        .map(|subform| {
            let name = subform.name.clone();
            view! {
                <div class="subform mt-4 pl-4 border-l-2 border-gray-200">
                    <h4 class="text-sm font-semibold text-gray-700 mb-2">{subform.title}</h4>
                    {subform
                        .fields
                        .into_iter()
                        .map(|field| view! { <FieldInput form=form subform=Some(name.clone()) field=field/> })
                        .collect::<Vec<_>>()}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-3">
            {fields}
            {subforms}
        </div>
    }
}

#[component]
fn FieldInput(form: RwSignal<FormModel>, subform: Option<String>, field: FieldSchema) -> impl IntoView {
    let id = input_id(subform.as_deref(), &field.name);
    let name = field.name.clone();
    let subform_for_read = subform.clone();

    let on_input = move |ev: web_sys::Event| {
        let value = Value::String(event_target_value(&ev));
        form.update(|f| {
            match &subform {
                Some(subform) => f.set_subform_value(subform, &name, value),
                None => f.set_value(&name, value),
            };
        });
    };

    let read_name = field.name.clone();
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</label>
            <input
                type="text"
                id=id
                name=field.name.clone()
                class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder=field.placeholder().unwrap_or_default().to_string()
                required=field.required
                prop:value=move || {
                    form.with(|f| {
                        let value = match &subform_for_read {
                            Some(subform) => f.subform_value(subform, &read_name),
                            None => f.value(&read_name),
                        };
                        input_text(value)
                    })
                }
                on:input=on_input
            />
        </div>
    }
}

/// Alert text for a form that cannot be sent yet, `None` when it can.
pub fn missing_fields_message(form: &FormModel) -> Option<String> {
    let missing = form.missing_required();
    if missing.is_empty() {
        return None;
    }
    Some(format!("Missing required fields: {}", missing.join(", ")))
}

/// Element id of an input; subform fields are prefixed with the subform name.
pub fn input_id(subform: Option<&str>, field: &str) -> String {
    match subform {
        Some(subform) => format!("field-{}-{}", subform, field),
        None => format!("field-{}", field),
    }
}

/// Text shown in an input. Unset fields are empty.
pub fn input_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
