//! Schema-Driven Form Generation
//!
//! Builds editable forms from the JSON schema carried by a hypermedia control
//! and serializes the edited values back into a submission payload:
//! - Scalar properties become top-level fields
//! - Object properties become subforms, one level deep

pub mod builder;
pub mod model;
pub mod schema;

pub use builder::*;
pub use model::FormModel;
pub use schema::{FieldSchema, FieldType, FormSchema, Subform};
