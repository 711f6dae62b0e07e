use crate::model::surface::Surface;
use crate::name::HasName;
use crate::uid::UID;
use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// A room-level container of surfaces.
///
/// `direction_of_relative_north_deg` is the rotation of this space's local
/// frame relative to the building frame; it composes with the building's
/// north axis into the total rotation from true north.
#[derive(Debug, Clone)]
pub struct Space {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    pub direction_of_relative_north_deg: f64,
    surfaces: HashMap<String, Surface>,
}

impl HasName for Space {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Space {
    pub fn new(name: &str, direction_of_relative_north_deg: f64, mut surfaces: Vec<Surface>) -> Self {
        let uid = UID::new();
        for s in surfaces.iter_mut() {
            s.parent = Some(uid.clone());
        }
        let surfaces: HashMap<String, Surface> =
            surfaces.into_iter().map(|x| (x.name.clone(), x)).collect();
        Self {
            name: name.to_string(),
            uid,
            parent: None,
            direction_of_relative_north_deg,
            surfaces,
        }
    }

    pub fn surfaces(&self) -> Vec<&Surface> {
        self.surfaces.values().collect()
    }

    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.get(name)
    }

    /// Walls exposed to ambient air, the only surfaces that contribute to
    /// the space-level orientation aggregate.
    pub fn exterior_walls(&self) -> Vec<&Surface> {
        self.surfaces
            .values()
            .filter(|s| s.is_exterior_wall())
            .collect()
    }

    pub fn add_surface(&mut self, mut surface: Surface) -> Result<()> {
        if self.surfaces.contains_key(&surface.name) {
            return Err(anyhow!("Surface is already present: {}", &surface.name));
        }
        surface.parent = Some(self.uid.clone());
        self.surfaces.insert(surface.name.clone(), surface);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use crate::model::surface::{BoundaryCondition, SurfaceType};

    fn wall(name: &str, boundary: BoundaryCondition, surface_type: SurfaceType) -> Surface {
        Surface::new(name, Vector::new(0.0, 1.0, 0.0), 10.0, boundary, surface_type).unwrap()
    }

    #[test]
    fn test_exterior_walls_filter() {
        let space = Space::new(
            "space_1",
            0.0,
            vec![
                wall("wall_out", BoundaryCondition::Outdoors, SurfaceType::Wall),
                wall("wall_gnd", BoundaryCondition::Ground, SurfaceType::Wall),
                wall("roof", BoundaryCondition::Outdoors, SurfaceType::RoofCeiling),
            ],
        );
        let exterior = space.exterior_walls();
        assert_eq!(exterior.len(), 1);
        assert_eq!(exterior[0].name, "wall_out");
    }

    #[test]
    fn test_add_surface_sets_parent() -> Result<()> {
        let mut space = Space::new("space_1", 0.0, Vec::new());
        space.add_surface(wall("wall", BoundaryCondition::Outdoors, SurfaceType::Wall))?;
        assert_eq!(space.surface("wall").unwrap().parent, Some(space.uid.clone()));
        Ok(())
    }

    #[test]
    fn test_duplicate_surface_rejected() -> Result<()> {
        let mut space = Space::new("space_1", 0.0, Vec::new());
        space.add_surface(wall("wall", BoundaryCondition::Outdoors, SurfaceType::Wall))?;
        let dup = space.add_surface(wall("wall", BoundaryCondition::Ground, SurfaceType::Wall));
        assert!(dup.is_err());
        Ok(())
    }
}
