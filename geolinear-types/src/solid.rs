use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::surface::Surface;

/// Volume bounded by an exterior shell and zero or more interior shells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    id: Option<String>,
    crs: Option<Crs>,
    exterior: Surface,
    interiors: Vec<Surface>,
}

impl Solid {
    /// Creates a new solid.
    pub fn new(
        id: Option<String>,
        crs: Option<Crs>,
        exterior: Surface,
        interiors: Vec<Surface>,
    ) -> Self {
        Self {
            id,
            crs,
            exterior,
            interiors,
        }
    }

    /// Identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Coordinate system.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Exterior shell.
    pub fn exterior(&self) -> &Surface {
        &self.exterior
    }

    /// Interior shells.
    pub fn interiors(&self) -> &[Surface] {
        &self.interiors
    }
}
