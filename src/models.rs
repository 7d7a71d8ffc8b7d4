//! Frontend Models
//!
//! Data structures matching the companion server's payloads.

use serde::Deserialize;

/// One stored image on the device's companion server.
///
/// `name` doubles as the storage filename and the route parameter for
/// preview, display and delete. Extra fields sent by the server are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    pub name: String,
}

impl ImageRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
