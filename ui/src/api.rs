//! Reservation API calls from the browser

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use std::fmt;
use tellus_mason::reservation::{rooms_from_collection, BookingList, Room};
use tellus_mason::form::{serialize, FormModel};
use tellus_mason::{ApiConfig, Control, MasonCollection, MasonError};

/// Outcome of a failed call; the caller decides what to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Status { status: u16, message: Option<String> },
    Decode(String),
    /// The control names a method a form cannot be sent with
    Method(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Request failed: {}", e),
            ApiError::Status { status, message: Some(message) } => write!(f, "{} ({})", message, status),
            ApiError::Status { status, message: None } => write!(f, "Server returned {}", status),
            ApiError::Decode(e) => write!(f, "Failed to parse response: {}", e),
            ApiError::Method(m) => write!(f, "Unsupported method '{}'", m),
        }
    }
}

pub async fn get_rooms(config: &ApiConfig) -> Result<Vec<Room>, ApiError> {
    let body = get(config, &config.entrypoint).await?;
    let collection = decode(body)?;
    Ok(rooms_from_collection(collection))
}

pub async fn get_room_bookings(config: &ApiConfig, href: &str) -> Result<BookingList, ApiError> {
    let body = get(config, href).await?;
    let collection = decode(body)?;
    Ok(BookingList::from_collection(&collection))
}

pub async fn delete_booking(config: &ApiConfig, href: &str) -> Result<(), ApiError> {
    let request = Request::delete(&config.resolve(href)).header("Accept", &config.mason_mime);
    send(request.send().await).await.map(|_| ())
}

/// Sends a form to its action with the method of the control it came from.
pub async fn submit(
    config: &ApiConfig,
    control: &Control,
    form: &FormModel,
) -> Result<(), ApiError> {
    let url = config.resolve(form.action());
    let builder = match form_method(control)? {
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        _ => Request::patch(&url),
    };
    let request = with_json_body(config, builder, &serialize(form))?;
    send(request.send().await).await.map(|_| ())
}

/// Upper-cased method of a control that carries a request body.
pub fn form_method(control: &Control) -> Result<&'static str, ApiError> {
    match control.method().to_ascii_uppercase().as_str() {
        "POST" => Ok("POST"),
        "PUT" => Ok("PUT"),
        "PATCH" => Ok("PATCH"),
        _ => Err(ApiError::Method(control.method().to_string())),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

async fn get(config: &ApiConfig, href: &str) -> Result<Value, ApiError> {
    let request = Request::get(&config.resolve(href)).header("Accept", &config.mason_mime);
    send(request.send().await).await
}

fn with_json_body(config: &ApiConfig, builder: RequestBuilder, body: &Value) -> Result<Request, ApiError> {
    let text = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    builder
        .header("Accept", &config.mason_mime)
        .header("Content-Type", &config.json_mime)
        .body(text)
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send(result: Result<Response, gloo_net::Error>) -> Result<Value, ApiError> {
    let response = result.map_err(|e| {
        log::warn!("Received error: {}", e);
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    log::debug!("Received response from {}: {} {}", response.url(), status, text);

    if !response.ok() {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| MasonError::from_body(&body))
            .map(|error| error.to_string());
        log::warn!("Received error: {} {:?}", status, message);
        return Err(ApiError::Status { status, message });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode(body: Value) -> Result<MasonCollection, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
