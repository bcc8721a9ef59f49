pub mod bookings;
pub mod rooms;
pub mod schema_form;
