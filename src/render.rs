//! Plain-text rendering of rooms, bookings and forms

use serde_json::Value;
use std::fmt::Write;
use tellus_mason::form::{FieldSchema, FormModel};
use tellus_mason::reservation::{BookingList, Room};

pub fn render_rooms(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return "No rooms found\n".to_string();
    }

    let mut out = String::new();
    for room in rooms {
        match room.bookings_href() {
            Some(href) => writeln!(out, "- {} ({})", room.name, href).ok(),
            None => writeln!(out, "- {}", room.name).ok(),
        };
    }
    out
}

pub fn render_bookings(room: &str, list: &BookingList) -> String {
    let mut out = format!("Bookings of {}\n", room);
    if list.bookings.is_empty() {
        out.push_str("  (no bookings)\n");
    }
    for booking in &list.bookings {
        let mut line = format!("  - {}", booking.summary());
        if let Some(delete) = &booking.delete {
            write!(line, " | {}: {}", delete.title_or("Delete"), delete.href).ok();
        }
        writeln!(out, "{}", line).ok();
    }
    out
}

/// Lists form fields in display order, with labels, names and current values.
pub fn render_form(form: &FormModel) -> String {
    let mut out = format!("Form -> {}\n", form.action());
    let schema = form.schema();
    if schema.is_empty() {
        out.push_str("  (no fields)\n");
        return out;
    }

    for field in &schema.fields {
        render_field(&mut out, "  ", &field.name, field, form.value(&field.name));
    }
    for subform in &schema.subforms {
        writeln!(out, "  [{}]", subform.title).ok();
        for field in &subform.fields {
            let path = format!("{}.{}", subform.name, field.name);
            let value = form.subform_value(&subform.name, &field.name);
            render_field(&mut out, "    ", &path, field, value);
        }
    }
    out
}

fn render_field(out: &mut String, indent: &str, path: &str, field: &FieldSchema, value: Option<&Value>) {
    let mut line = format!("{}{} <{}>", indent, field.label(), path);
    if let Some(value) = value {
        match value {
            Value::String(s) => write!(line, " = {}", s).ok(),
            other => write!(line, " = {}", other).ok(),
        };
    } else if let Some(placeholder) = field.placeholder() {
        write!(line, " ({})", placeholder).ok();
    }
    writeln!(out, "{}", line).ok();
}
