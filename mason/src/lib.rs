//! # Tellus Mason
//!
//! Target-independent core of the Tellus reservation clients: the Mason+JSON
//! document model, typed views over the reservation API, and the schema form
//! builder that turns hypermedia control schemas into editable forms.
//!
//! ```rust
//! use serde_json::json;
//! use tellus_mason::form::{build_form, populate, serialize};
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "username": { "type": "string", "title": "User Name" }
//!     },
//!     "required": ["username"]
//! });
//!
//! let form = build_form(&schema, "/tellus/api/rooms/Lab/bookings/");
//! let form = populate(form, &json!({ "username": "alice" }));
//! assert_eq!(serialize(&form), json!({ "username": "alice" }));
//! ```

pub mod config;
pub mod document;
pub mod form;
pub mod reservation;

pub use config::ApiConfig;
pub use document::{Control, MasonCollection, MasonError, MasonItem};
pub use form::{build_form, populate, serialize, FieldSchema, FieldType, FormModel, FormSchema};
