//! In-process mock of the Tellus reservation API

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tellus::client::ApiClient;
use tellus::mason::ApiConfig;

pub const MASON: &str = "application/vnd.mason+json";

#[derive(Clone)]
pub struct MockApi {
    pub bookings: Arc<Mutex<Vec<(u64, Value)>>>,
    pub lab: Arc<Mutex<Value>>,
    pub accept_headers: Arc<Mutex<Vec<String>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockApi {
    fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(vec![(
                1,
                json!({ "username": "alice", "bookingTime": "2017-03-01 10:00", "name": "Lab" }),
            )])),
            lab: Arc::new(Mutex::new(json!({
                "name": "Lab",
                "capacity": "8",
                "location": { "building": "TS", "floor": "2" }
            }))),
            accept_headers: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(2)),
        }
    }

    fn record_accept(&self, headers: &HeaderMap) {
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        self.accept_headers.lock().unwrap().push(accept);
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
    pub api: MockApi,
}

impl TestServer {
    pub async fn new() -> Self {
        let api = MockApi::new();
        let app = Router::new()
            .route("/tellus/api/rooms/", get(list_rooms))
            .route("/tellus/api/rooms/:name/", put(edit_room))
            .route(
                "/tellus/api/rooms/:name/bookings/",
                get(list_bookings).post(add_booking),
            )
            .route("/tellus/api/rooms/:name/bookings/:id/", delete(delete_booking))
            .with_state(api.clone());

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            base_url: format!("http://{}", addr),
            api,
        }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            ..Default::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::http(self.config(), Duration::from_secs(5), true).unwrap()
    }
}

fn mason_error(status: StatusCode, title: &str, details: &str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, MASON)],
        Json(json!({ "@error": { "@message": title, "@messages": [details] } })),
    )
        .into_response()
}

fn room_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "title": "Name", "description": "Room name", "type": "string" },
            "capacity": { "title": "Capacity", "type": "string" },
            "location": {
                "type": "object",
                "title": "Location",
                "properties": {
                    "building": { "title": "Building", "type": "string" },
                    "floor": { "title": "Floor", "type": "string" },
                    "coordinates": { "type": "object", "properties": { "x": { "type": "string" } } }
                }
            }
        },
        "required": ["name"]
    })
}

fn booking_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "username": { "title": "User Name", "description": "Username of the booking's owner", "type": "string" },
            "bookingTime": { "title": "Booking Time", "description": "Date and time of the booking", "type": "string" },
            "name": { "title": "Room name", "description": "Room name which the booking take place", "type": "string" }
        },
        "required": ["username", "bookingTime", "name"]
    })
}

async fn list_rooms(State(api): State<MockApi>, headers: HeaderMap) -> Response {
    api.record_accept(&headers);
    let mut lab = api.lab.lock().unwrap().clone();
    lab["@controls"] = json!({
        "tellus:bookings-room": {
            "href": "/tellus/api/rooms/Lab/bookings/",
            "title": "List all bookings of Room"
        },
        "edit": {
            "href": "/tellus/api/rooms/Lab/",
            "title": "Edit room",
            "method": "PUT",
            "encoding": "json",
            "schema": room_schema()
        }
    });

    let body = json!({
        "items": [
            lab,
            {
                "name": "Attic",
                "@controls": {
                    "tellus:bookings-room": { "href": "/tellus/api/rooms/Attic/bookings/" }
                }
            }
        ]
    });
    ([(header::CONTENT_TYPE, MASON)], Json(body)).into_response()
}

async fn list_bookings(
    State(api): State<MockApi>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    api.record_accept(&headers);
    if name != "Lab" {
        return mason_error(StatusCode::NOT_FOUND, "Resource not found", "No room with that name");
    }

    let items: Vec<Value> = api
        .bookings
        .lock()
        .unwrap()
        .iter()
        .map(|(id, booking)| {
            let mut item = booking.clone();
            item["@controls"] = json!({
                "tellus:delete": {
                    "href": format!("/tellus/api/rooms/Lab/bookings/{}/", id),
                    "title": "Delete booking"
                }
            });
            item
        })
        .collect();

    let body = json!({
        "items": items,
        "@controls": {
            "tellus:add-booking": {
                "title": "Create booking",
                "href": "/tellus/api/rooms/Lab/bookings/",
                "encoding": "json",
                "method": "POST",
                "schema": booking_schema()
            }
        }
    });
    ([(header::CONTENT_TYPE, MASON)], Json(body)).into_response()
}

async fn add_booking(
    State(api): State<MockApi>,
    Path(_name): Path<String>,
    Json(booking): Json<Value>,
) -> Response {
    let username = booking.get("username").and_then(Value::as_str).unwrap_or_default();
    if username.is_empty() {
        return mason_error(
            StatusCode::BAD_REQUEST,
            "Malformed input format",
            "The request body is missing username",
        );
    }

    let id = {
        let mut next_id = api.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        id
    };
    api.bookings.lock().unwrap().push((id, booking));
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/tellus/api/rooms/Lab/bookings/{}/", id))],
    )
        .into_response()
}

async fn delete_booking(
    State(api): State<MockApi>,
    Path((_name, id)): Path<(String, u64)>,
) -> Response {
    let mut bookings = api.bookings.lock().unwrap();
    let before = bookings.len();
    bookings.retain(|(existing, _)| *existing != id);
    if bookings.len() == before {
        return mason_error(StatusCode::NOT_FOUND, "Resource not found", "No booking with that id");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn edit_room(
    State(api): State<MockApi>,
    Path(_name): Path<String>,
    Json(room): Json<Value>,
) -> Response {
    *api.lab.lock().unwrap() = room;
    StatusCode::NO_CONTENT.into_response()
}
