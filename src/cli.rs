use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Tellus - hypermedia client for the Tellus room reservation API
#[derive(Parser, Debug, Clone)]
#[command(name = "tellus", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "TELLUS_CONFIG", default_value = "tellus.toml", global = true)]
    pub config: PathBuf,

    /// Origin of the reservation API (e.g. http://localhost:5000)
    #[arg(long, env = "TELLUS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Path of the rooms list, the API entry point
    #[arg(long, env = "TELLUS_ENTRYPOINT", global = true)]
    pub entrypoint: Option<String>,

    /// Log request and response bodies
    #[arg(long, env = "TELLUS_DEBUG", num_args = 0..=1, require_equals = true, default_missing_value = "true", global = true)]
    pub debug: Option<bool>,

    /// Request timeout in seconds
    #[arg(long, env = "TELLUS_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all rooms
    Rooms,
    /// List the bookings of a room
    Bookings {
        /// Room name
        room: String,
    },
    /// Show the new booking form of a room
    Form {
        /// Room name
        room: String,
    },
    /// Create a booking for a room
    Book {
        /// Room name
        room: String,
        /// Field value, `name=value` or `subform.name=value`
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<FieldAssignment>,
    },
    /// Delete a booking through its delete link
    Delete {
        /// Href of the booking
        href: String,
    },
    /// Edit a room's metadata; without --set, shows the edit form
    EditRoom {
        /// Room name
        room: String,
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<FieldAssignment>,
    },
}

/// A `--set` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub subform: Option<String>,
    pub field: String,
    pub value: String,
}

impl FromStr for FieldAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
        let path = path.trim();
        if path.is_empty() {
            return Err(format!("missing field name in '{}'", s));
        }

        let (subform, field) = match path.split_once('.') {
            Some((subform, field)) if !subform.is_empty() && !field.is_empty() => {
                (Some(subform.to_string()), field.to_string())
            }
            Some(_) => return Err(format!("invalid field path '{}'", path)),
            None => (None, path.to_string()),
        };

        Ok(Self {
            subform,
            field,
            value: value.to_string(),
        })
    }
}
