use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Coordinate reference system identifier, e.g. `EPSG:4326`.
///
/// The linearization core never interprets the identifier. It is carried from input points and geometries to the
/// output ones unchanged. Cloning is cheap, so every point may hold its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs(Arc<str>);

impl Crs {
    /// Creates a new identifier.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The identifier string.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Crs {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
