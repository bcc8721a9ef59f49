//! Endpoint and media type settings handed to a transport at construction.

use serde::{Deserialize, Serialize};

/// Mason+JSON media type requested from the API.
pub const MASON_JSON: &str = "application/vnd.mason+json";

/// Media type of request bodies.
pub const PLAIN_JSON: &str = "application/json";

/// Rooms list, the entry point of the API.
pub const DEFAULT_ENTRYPOINT: &str = "/tellus/api/rooms/";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin the API is served from. Empty means same-origin (browser).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
    #[serde(default = "default_mason_mime")]
    pub mason_mime: String,
    #[serde(default = "default_json_mime")]
    pub json_mime: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_entrypoint() -> String {
    DEFAULT_ENTRYPOINT.to_string()
}

fn default_mason_mime() -> String {
    MASON_JSON.to_string()
}

fn default_json_mime() -> String {
    PLAIN_JSON.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            entrypoint: default_entrypoint(),
            mason_mime: default_mason_mime(),
            json_mime: default_json_mime(),
        }
    }
}

impl ApiConfig {
    /// Config for a client served from the same origin as the API.
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
            ..Self::default()
        }
    }

    /// URL of an href found in a document.
    ///
    /// Tellus only emits absolute URLs and absolute paths, and only those are
    /// supported: absolute URLs are returned unchanged and paths are appended
    /// to the origin in `base_url`. Any path component of `base_url` is
    /// dropped, matching how an absolute path resolves against a base URL.
    /// Relative hrefs (`rooms/`, `../x`) are treated as absolute paths.
    pub fn resolve(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            return href.to_string();
        }
        let origin = origin_of(&self.base_url);
        format!("{}/{}", origin, href.trim_start_matches('/'))
    }
}

/// `scheme://authority` of `url`, or `""` when `url` carries no scheme.
fn origin_of(url: &str) -> &str {
    let Some((_, rest)) = url.split_once("://") else {
        return "";
    };
    let authority_len = rest.find('/').unwrap_or(rest.len());
    &url[..url.len() - rest.len() + authority_len]
}
