use crate::name::HasName;
use crate::uid::UID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubSurfaceKind {
    FixedWindow,
    OperableWindow,
    Door,
    GlassDoor,
    Skylight,
}

/// An opening (window or door) hosted by a surface.
///
/// Openings carry no geometry of their own in this model: azimuth and
/// orientation are always borrowed from the parent surface, and the parent
/// link may legitimately be absent.
#[derive(Debug, Clone)]
pub struct SubSurface {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    pub kind: SubSurfaceKind,
}

impl HasName for SubSurface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl SubSurface {
    pub fn new(name: &str, kind: SubSurfaceKind) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            kind,
        }
    }
}
