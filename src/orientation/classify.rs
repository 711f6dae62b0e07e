use crate::Vector;
use crate::model::surface::Surface;
use crate::orientation::azimuth::{absolute_azimuth, relative_azimuth};
use crate::orientation::compass::{CompassMethod, Orientation, classify_azimuth};
use crate::orientation::rotation::compose_rotation;
use serde::Serialize;

/// Orientation of a single surface: the absolute azimuth is always known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceOrientation {
    pub azimuth: f64,
    pub orientation: Orientation,
}

/// Orientation of an element resolved through its parent chain.
///
/// The azimuth is absent when any link of the chain is missing, in which
/// case the orientation is [`Orientation::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementOrientation {
    pub azimuth: Option<f64>,
    pub orientation: Orientation,
}

impl ElementOrientation {
    pub fn unknown() -> Self {
        Self {
            azimuth: None,
            orientation: Orientation::Unknown,
        }
    }
}

impl From<SurfaceOrientation> for ElementOrientation {
    fn from(s: SurfaceOrientation) -> Self {
        Self {
            azimuth: Some(s.azimuth),
            orientation: s.orientation,
        }
    }
}

/// Classifies one surface from its outward normal and the rotations of its
/// local frame. Pure: identical inputs always give identical output.
pub fn classify_surface(
    normal: &Vector,
    local_rotation_deg: f64,
    building_rotation_deg: f64,
    method: CompassMethod,
) -> SurfaceOrientation {
    let rotation = compose_rotation(local_rotation_deg, building_rotation_deg);
    let azimuth = absolute_azimuth(relative_azimuth(normal), rotation);
    SurfaceOrientation {
        azimuth,
        orientation: classify_azimuth(azimuth, method),
    }
}

/// Classifies an opening (window or door) through its parent surface.
///
/// Openings carry no normal of their own; they borrow the parent surface's
/// normal. A missing parent is a defined outcome, not an error: the result
/// is `{ azimuth: None, orientation: Unknown }`.
pub fn classify_opening(
    parent: Option<&Surface>,
    local_rotation_deg: f64,
    building_rotation_deg: f64,
    method: CompassMethod,
) -> ElementOrientation {
    match parent {
        Some(surface) => classify_surface(
            surface.outward_normal(),
            local_rotation_deg,
            building_rotation_deg,
            method,
        )
        .into(),
        None => ElementOrientation::unknown(),
    }
}
