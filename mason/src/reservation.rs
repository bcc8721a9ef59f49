//! Typed views over Tellus reservation documents

use chrono::{DateTime, Datelike, Timelike};
use serde_json::Value;

use crate::document::{Control, MasonCollection, MasonItem};
use crate::form::{build_form, populate, FormModel};

pub const REL_BOOKINGS_ROOM: &str = "tellus:bookings-room";
pub const REL_ADD_BOOKING: &str = "tellus:add-booking";
pub const REL_DELETE: &str = "tellus:delete";
pub const REL_EDIT: &str = "edit";

/// A room of the rooms list.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub item: MasonItem,
}

impl Room {
    /// Returns `None` for items without a name.
    pub fn from_item(item: MasonItem) -> Option<Self> {
        let name = item.field_str("name")?.to_string();
        Some(Self { name, item })
    }

    /// Href of the bookings of this room.
    pub fn bookings_href(&self) -> Option<&str> {
        self.item.control(REL_BOOKINGS_ROOM).map(|c| c.href.as_str())
    }

    pub fn edit_control(&self) -> Option<&Control> {
        self.item.control(REL_EDIT)
    }

    /// Edit form prefilled with the room's current properties.
    pub fn edit_form(&self) -> Option<FormModel> {
        let control = self.edit_control()?;
        let schema = control.schema.as_ref()?;
        Some(populate(build_form(schema, &control.href), &self.item.data()))
    }
}

pub fn rooms_from_collection(collection: MasonCollection) -> Vec<Room> {
    collection
        .items
        .into_iter()
        .filter_map(|item| {
            let room = Room::from_item(item);
            if room.is_none() {
                tracing::warn!("Skipping room item without a name");
            }
            room
        })
        .collect()
}

/// A booking of a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub username: Option<String>,
    pub booking_time: Option<Value>,
    pub delete: Option<Control>,
}

impl Booking {
    pub fn from_item(item: &MasonItem) -> Self {
        Self {
            username: item.field("username").map(display_value),
            booking_time: item.field("bookingTime").cloned(),
            delete: item.control(REL_DELETE).cloned(),
        }
    }

    /// Booking time as shown to users; numeric times are UNIX timestamps.
    pub fn booking_time_display(&self) -> Option<String> {
        match self.booking_time.as_ref()? {
            Value::Number(n) => Some(match n.as_i64() {
                Some(timestamp) => format_timestamp(timestamp),
                None => n.to_string(),
            }),
            other => Some(display_value(other)),
        }
    }

    /// One-line summary: `Username: alice | Time: ...`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(username) = &self.username {
            parts.push(format!("Username: {}", username));
        }
        if let Some(time) = self.booking_time_display() {
            parts.push(format!("Time: {}", time));
        }
        parts.join(" | ")
    }
}

/// Bookings of a room plus the affordance to add one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
    pub add_booking: Option<Control>,
}

impl BookingList {
    pub fn from_collection(collection: &MasonCollection) -> Self {
        Self {
            bookings: collection.items.iter().map(Booking::from_item).collect(),
            add_booking: collection.control(REL_ADD_BOOKING).cloned(),
        }
    }

    /// Empty form for a new booking, when the server offers one with a schema.
    pub fn new_booking_form(&self) -> Option<FormModel> {
        let control = self.add_booking.as_ref()?;
        let schema = control.schema.as_ref()?;
        Some(build_form(schema, &control.href))
    }
}

/// Formats a UNIX timestamp as `d.m.yyyy at h:m:s` (UTC, no zero padding).
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) => format!(
            "{}.{}.{} at {}:{}:{}",
            date.day(),
            date.month(),
            date.year(),
            date.hour(),
            date.minute(),
            date.second()
        ),
        None => timestamp.to_string(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rooms_document() -> MasonCollection {
        serde_json::from_value(json!({
            "items": [
                {
                    "name": "Lab",
                    "capacity": 8,
                    "@controls": {
                        "tellus:bookings-room": { "href": "/tellus/api/rooms/Lab/bookings/" },
                        "edit": {
                            "href": "/tellus/api/rooms/Lab/",
                            "method": "PUT",
                            "schema": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string", "title": "Name" },
                                    "capacity": { "type": "integer", "title": "Capacity" },
                                    "location": {
                                        "type": "object",
                                        "properties": {
                                            "building": { "type": "string" },
                                            "floor": { "type": "string" }
                                        }
                                    }
                                },
                                "required": ["name"]
                            }
                        }
                    }
                },
                { "@controls": {} }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_rooms_skip_unnamed_items() {
        let rooms = rooms_from_collection(rooms_document());
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "Lab");
        assert_eq!(rooms[0].bookings_href(), Some("/tellus/api/rooms/Lab/bookings/"));
    }

    #[test]
    fn test_room_edit_form_is_prefilled() {
        let rooms = rooms_from_collection(rooms_document());
        let form = rooms[0].edit_form().unwrap();

        assert_eq!(form.action(), "/tellus/api/rooms/Lab/");
        assert_eq!(
            form.serialize(),
            json!({
                "name": "Lab",
                "capacity": 8,
                "location": { "building": "", "floor": "" }
            })
        );
    }

    #[test]
    fn test_booking_list() {
        let collection: MasonCollection = serde_json::from_value(json!({
            "items": [
                {
                    "username": "alice",
                    "bookingTime": "2017-03-01 10:00",
                    "@controls": {
                        "tellus:delete": { "href": "/tellus/api/rooms/Lab/bookings/1/", "title": "Delete booking" }
                    }
                },
                { "username": "bob", "@controls": {} }
            ],
            "@controls": {
                "tellus:add-booking": {
                    "href": "/tellus/api/rooms/Lab/bookings/",
                    "method": "POST",
                    "schema": {
                        "properties": { "username": { "type": "string" } },
                        "required": ["username"]
                    }
                }
            }
        }))
        .unwrap();

        let list = BookingList::from_collection(&collection);
        assert_eq!(list.bookings.len(), 2);
        assert_eq!(list.bookings[0].summary(), "Username: alice | Time: 2017-03-01 10:00");
        assert_eq!(
            list.bookings[0].delete.as_ref().map(|c| c.title_or("Delete")),
            Some("Delete booking")
        );
        assert!(list.bookings[1].delete.is_none());

        let form = list.new_booking_form().unwrap();
        assert_eq!(form.action(), "/tellus/api/rooms/Lab/bookings/");
        assert!(form.fields()[0].required);
    }

    #[test]
    fn test_add_booking_without_schema() {
        let collection: MasonCollection = serde_json::from_value(json!({
            "items": [],
            "@controls": { "tellus:add-booking": { "href": "/x/" } }
        }))
        .unwrap();
        assert!(BookingList::from_collection(&collection).new_booking_form().is_none());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1.1.1970 at 0:0:0");
        assert_eq!(format_timestamp(1_488_362_405), "1.3.2017 at 10:0:5");
    }

    #[test]
    fn test_numeric_booking_time() {
        let booking = Booking {
            username: None,
            booking_time: Some(json!(0)),
            delete: None,
        };
        assert_eq!(booking.summary(), "Time: 1.1.1970 at 0:0:0");
    }

    #[test]
    fn test_non_integer_booking_time_is_shown_raw() {
        let booking = Booking {
            username: Some("a".to_string()),
            booking_time: Some(json!(1488362405.5)),
            delete: None,
        };
        assert_eq!(booking.summary(), "Username: a | Time: 1488362405.5");

        let booking = Booking {
            booking_time: Some(json!(u64::MAX)),
            ..booking
        };
        assert_eq!(booking.summary(), "Username: a | Time: 18446744073709551615");
    }
}
