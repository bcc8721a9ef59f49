//! Command execution
//!
//! Each command follows hypermedia controls from the entry point and returns
//! the text to print.

use anyhow::{bail, Context};
use serde_json::Value;
use tellus_mason::form::FormModel;
use tellus_mason::reservation::{BookingList, REL_ADD_BOOKING, REL_EDIT};
use tracing::debug;

use crate::cli::{Command, FieldAssignment};
use crate::client::{ApiClient, ClientError};
use crate::render::{render_bookings, render_form, render_rooms};

pub async fn run(command: Command, client: &ApiClient) -> anyhow::Result<String> {
    match command {
        Command::Rooms => {
            let rooms = client
                .get_rooms(None)
                .await
                .context("Could not fetch the list of rooms")?;
            Ok(render_rooms(&rooms))
        }
        Command::Bookings { room } => {
            let list = room_bookings(client, &room).await?;
            Ok(render_bookings(&room, &list))
        }
        Command::Form { room } => {
            let list = room_bookings(client, &room).await?;
            let form = list
                .new_booking_form()
                .ok_or_else(|| ClientError::missing_control(REL_ADD_BOOKING))?;
            Ok(render_form(&form))
        }
        Command::Book { room, set } => {
            let list = room_bookings(client, &room).await?;
            let (control, mut form) = list
                .add_booking
                .as_ref()
                .zip(list.new_booking_form())
                .ok_or_else(|| ClientError::missing_control(REL_ADD_BOOKING))?;
            apply_assignments(&mut form, &set)?;
            check_required(&form)?;

            client
                .submit(&form, control)
                .await
                .context("Could not create new booking")?;

            let reloaded = room_bookings(client, &room).await?;
            Ok(format!(
                "Booking successfully added\n{}",
                render_bookings(&room, &reloaded)
            ))
        }
        Command::Delete { href } => {
            client
                .delete_booking(&href)
                .await
                .context("The booking could not be deleted from the database")?;
            Ok("The booking has been deleted from the database\n".to_string())
        }
        Command::EditRoom { room, set } => {
            let found = client
                .find_room(&room)
                .await
                .with_context(|| format!("Cannot extract information about room '{}'", room))?;
            let (control, mut form) = found
                .edit_control()
                .zip(found.edit_form())
                .ok_or_else(|| ClientError::missing_control(REL_EDIT))?;

            if set.is_empty() {
                return Ok(render_form(&form));
            }
            apply_assignments(&mut form, &set)?;
            check_required(&form)?;

            client
                .submit(&form, control)
                .await
                .context("Could not modify room information")?;
            Ok("Room information has been modified successfully\n".to_string())
        }
    }
}

async fn room_bookings(client: &ApiClient, room: &str) -> anyhow::Result<BookingList> {
    let context = || format!("Cannot extract information about room '{}'", room);
    let found = client.find_room(room).await.with_context(context)?;
    let list = client.bookings_of(&found).await.with_context(context)?;
    debug!(room, bookings = list.bookings.len(), "Fetched bookings");
    Ok(list)
}

/// Writes `--set` values into the form, rejecting undeclared fields.
pub fn apply_assignments(form: &mut FormModel, assignments: &[FieldAssignment]) -> anyhow::Result<()> {
    for assignment in assignments {
        let value = Value::String(assignment.value.clone());
        let accepted = match &assignment.subform {
            Some(subform) => form.set_subform_value(subform, &assignment.field, value),
            None => form.set_value(&assignment.field, value),
        };
        if !accepted {
            let path = match &assignment.subform {
                Some(subform) => format!("{}.{}", subform, assignment.field),
                None => assignment.field.clone(),
            };
            bail!("Unknown field '{}'\n{}", path, render_form(form));
        }
    }
    Ok(())
}

fn check_required(form: &FormModel) -> anyhow::Result<()> {
    let missing = form.missing_required();
    if !missing.is_empty() {
        bail!("Missing required fields: {}", missing.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tellus_mason::form::{build_form, serialize};

    fn form() -> FormModel {
        build_form(
            &json!({
                "properties": {
                    "username": { "type": "string" },
                    "owner": { "type": "object", "properties": { "email": { "type": "string" } } }
                },
                "required": ["username"]
            }),
            "/rooms/Lab/bookings/",
        )
    }

    #[test]
    fn test_apply_assignments() {
        let mut form = form();
        let set: Vec<FieldAssignment> = vec![
            "username=alice".parse().unwrap(),
            "owner.email=a@b.c".parse().unwrap(),
        ];
        apply_assignments(&mut form, &set).unwrap();
        assert_eq!(
            serialize(&form),
            json!({ "username": "alice", "owner": { "email": "a@b.c" } })
        );
        assert!(check_required(&form).is_ok());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = form();
        let set: Vec<FieldAssignment> = vec!["owner.phone=123".parse().unwrap()];
        let err = apply_assignments(&mut form, &set).unwrap_err();
        assert!(err.to_string().starts_with("Unknown field 'owner.phone'"));
    }

    #[test]
    fn test_missing_required() {
        let err = check_required(&form()).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: username");
    }
}
