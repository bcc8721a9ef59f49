//! Reservation API client
//!
//! One operation per link relation the client follows. Each returns a
//! `ClientResult` and leaves the reaction (printing, reloading) to the caller.

pub mod error;
pub mod transport;

pub use error::{ClientError, ClientResult};
pub use transport::{HttpTransport, Transport};

use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tellus_mason::form::{serialize, FormModel};
use tellus_mason::reservation::{rooms_from_collection, BookingList, Room, REL_BOOKINGS_ROOM};
use tellus_mason::{ApiConfig, Control, MasonCollection};
use tracing::info;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    /// Client over HTTP, configured from `config`.
    pub fn http(config: ApiConfig, timeout: std::time::Duration, debug: bool) -> ClientResult<Self> {
        let transport = HttpTransport::new(config.clone(), timeout, debug)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    /// Rooms list; `href` defaults to the configured entry point.
    pub async fn get_rooms(&self, href: Option<&str>) -> ClientResult<Vec<Room>> {
        let href = href.unwrap_or(&self.config.entrypoint);
        let body = self.transport.get(href).await?;
        let collection: MasonCollection = serde_json::from_value(body)?;
        Ok(rooms_from_collection(collection))
    }

    pub async fn find_room(&self, name: &str) -> ClientResult<Room> {
        self.get_rooms(None)
            .await?
            .into_iter()
            .find(|room| room.name == name)
            .ok_or_else(|| ClientError::NotFound {
                what: format!("room '{}'", name),
            })
    }

    /// Bookings list found at `href`.
    pub async fn get_room_bookings(&self, href: &str) -> ClientResult<BookingList> {
        let body = self.transport.get(href).await?;
        let collection: MasonCollection = serde_json::from_value(body)?;
        Ok(BookingList::from_collection(&collection))
    }

    /// Follows the room's `tellus:bookings-room` link.
    pub async fn bookings_of(&self, room: &Room) -> ClientResult<BookingList> {
        let href = room
            .bookings_href()
            .ok_or_else(|| ClientError::missing_control(REL_BOOKINGS_ROOM))?;
        self.get_room_bookings(href).await
    }

    pub async fn delete_booking(&self, href: &str) -> ClientResult<()> {
        self.transport.delete(href).await?;
        info!(href, "Booking deleted");
        Ok(())
    }

    /// Sends the form to its action with the method of `control`, the
    /// affordance the form was built from.
    pub async fn submit(&self, form: &FormModel, control: &Control) -> ClientResult<Value> {
        let method = control_method(control)?;
        let payload = serialize(form);
        let response = self.transport.send(method.clone(), form.action(), Some(&payload)).await?;
        info!(%method, href = form.action(), "Form submitted");
        Ok(response)
    }
}

/// HTTP method of a control, case-insensitive; Mason defaults to GET.
pub fn control_method(control: &Control) -> ClientResult<Method> {
    Method::from_bytes(control.method().to_ascii_uppercase().as_bytes()).map_err(|_| {
        ClientError::InvalidMethod {
            method: control.method().to_string(),
            href: control.href.clone(),
        }
    })
}
