//! Batch orientation reports over a whole building.
//!
//! Each report visits every element of its kind, classifies it, and returns
//! one record per element in name order. Malformed or disconnected elements
//! come back with the sentinel labels instead of aborting the run.

use crate::model::building::Building;
use crate::model::surface::SurfaceType;
use crate::name::SortByName;
use crate::orientation::compass::{CompassMethod, Orientation};
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceOrientationRecord {
    pub space_name: String,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceOrientationRecord {
    pub space_name: String,
    pub surface_name: String,
    pub azimuth: Option<f64>,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubSurfaceOrientationRecord {
    pub surface_name: String,
    pub sub_surface_name: String,
    pub azimuth: Option<f64>,
    pub orientation: Orientation,
}

/// One aggregate orientation per space.
pub fn space_orientation_report(building: &Building) -> Vec<SpaceOrientationRecord> {
    let mut spaces = building.spaces();
    spaces.sort_by_name();

    let records: Vec<SpaceOrientationRecord> = spaces
        .iter()
        .map(|space| {
            let orientation = building.space_orientation(space);
            debug!("Space {}: {}", space.name, orientation);
            SpaceOrientationRecord {
                space_name: space.name.clone(),
                orientation,
            }
        })
        .collect();

    info!("Classified orientation of {} spaces", records.len());
    records
}

/// Azimuth and orientation for every wall-type surface in the building.
///
/// Roofs and floors are skipped: their normals have no horizontal
/// projection, so a compass label for them would look valid while meaning
/// nothing.
pub fn surface_orientation_report(
    building: &Building,
    method: CompassMethod,
) -> Vec<SurfaceOrientationRecord> {
    let mut spaces = building.spaces();
    spaces.sort_by_name();

    let mut records = Vec::new();
    for space in spaces {
        let mut surfaces = space.surfaces();
        surfaces.sort_by_name();
        for surface in surfaces
            .into_iter()
            .filter(|s| s.surface_type == SurfaceType::Wall)
        {
            let res = building.surface_orientation(surface, method);
            records.push(SurfaceOrientationRecord {
                space_name: space.name.clone(),
                surface_name: surface.name.clone(),
                azimuth: res.azimuth,
                orientation: res.orientation,
            });
        }
    }

    info!("Classified orientation of {} surfaces", records.len());
    records
}

/// Azimuth and orientation for every opening, borrowed from its host surface.
pub fn sub_surface_orientation_report(
    building: &Building,
    method: CompassMethod,
) -> Vec<SubSurfaceOrientationRecord> {
    let mut spaces = building.spaces();
    spaces.sort_by_name();

    let mut records = Vec::new();
    for space in spaces {
        let mut surfaces = space.surfaces();
        surfaces.sort_by_name();
        for surface in surfaces {
            let mut openings = surface.sub_surfaces();
            openings.sort_by_name();
            for opening in openings {
                let res = building.sub_surface_orientation(opening, method);
                records.push(SubSurfaceOrientationRecord {
                    surface_name: surface.name.clone(),
                    sub_surface_name: opening.name.clone(),
                    azimuth: res.azimuth,
                    orientation: res.orientation,
                });
            }
        }
    }

    info!("Classified orientation of {} sub-surfaces", records.len());
    records
}
