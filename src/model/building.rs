use crate::model::space::Space;
use crate::model::subsurface::SubSurface;
use crate::model::surface::Surface;
use crate::name::HasName;
use crate::orientation::aggregate;
use crate::orientation::classify::{self, ElementOrientation};
use crate::orientation::compass::{CompassMethod, Orientation};
use crate::orientation::rotation::compose_rotation;
use crate::uid::UID;
use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// Root of the model hierarchy.
///
/// `north_axis_deg` is the global rotation offset from true north shared by
/// every space in the building.
#[derive(Debug, Clone)]
pub struct Building {
    pub name: String,
    pub uid: UID,
    pub north_axis_deg: f64,
    spaces: HashMap<String, Space>,
}

impl HasName for Building {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Building {
    pub fn new(name: &str, north_axis_deg: f64, mut spaces: Vec<Space>) -> Self {
        let uid = UID::new();
        for s in spaces.iter_mut() {
            s.parent = Some(uid.clone());
        }
        let spaces: HashMap<String, Space> =
            spaces.into_iter().map(|x| (x.name.clone(), x)).collect();
        Self {
            name: name.to_string(),
            uid,
            north_axis_deg,
            spaces,
        }
    }

    pub fn spaces(&self) -> Vec<&Space> {
        self.spaces.values().collect()
    }

    pub fn space(&self, name: &str) -> Option<&Space> {
        self.spaces.get(name)
    }

    pub fn surfaces(&self) -> Vec<&Surface> {
        self.spaces.values().flat_map(|s| s.surfaces()).collect()
    }

    pub fn add_space(&mut self, mut space: Space) -> Result<()> {
        if self.spaces.contains_key(&space.name) {
            return Err(anyhow!("Space is already present: {}", &space.name));
        }
        space.parent = Some(self.uid.clone());
        self.spaces.insert(space.name.clone(), space);

        Ok(())
    }

    /// Rotation from true north for a space: local direction of relative
    /// north composed with the building's north axis.
    pub fn total_rotation_deg(&self, space: &Space) -> f64 {
        compose_rotation(space.direction_of_relative_north_deg, self.north_axis_deg)
    }

    /// Space that owns `surface`, resolved through the parent link.
    pub fn space_of_surface(&self, surface: &Surface) -> Option<&Space> {
        let parent = surface.parent.as_ref()?;
        self.spaces.values().find(|s| &s.uid == parent)
    }

    /// Surface that hosts `sub_surface`, together with its owning space.
    pub fn host_of_sub_surface(&self, sub_surface: &SubSurface) -> Option<(&Space, &Surface)> {
        let parent = sub_surface.parent.as_ref()?;
        for space in self.spaces.values() {
            if let Some(surface) = space.surfaces().into_iter().find(|s| &s.uid == parent) {
                return Some((space, surface));
            }
        }
        None
    }

    /// Classifies one surface, resolving its space through the parent chain.
    ///
    /// A surface whose space cannot be resolved yields
    /// `{ azimuth: None, orientation: Unknown }`; nothing here errors.
    pub fn surface_orientation(
        &self,
        surface: &Surface,
        method: CompassMethod,
    ) -> ElementOrientation {
        match self.space_of_surface(surface) {
            Some(space) => classify::classify_surface(
                surface.outward_normal(),
                space.direction_of_relative_north_deg,
                self.north_axis_deg,
                method,
            )
            .into(),
            None => ElementOrientation::unknown(),
        }
    }

    /// Classifies an opening by walking SubSurface → Surface → Space →
    /// Building. Any missing link short-circuits to Unknown.
    pub fn sub_surface_orientation(
        &self,
        sub_surface: &SubSurface,
        method: CompassMethod,
    ) -> ElementOrientation {
        match self.host_of_sub_surface(sub_surface) {
            Some((space, surface)) => classify::classify_opening(
                Some(surface),
                space.direction_of_relative_north_deg,
                self.north_axis_deg,
                method,
            ),
            None => ElementOrientation::unknown(),
        }
    }

    /// One representative orientation label for a whole space, from the
    /// area-weighted resultant of its exterior walls.
    pub fn space_orientation(&self, space: &Space) -> Orientation {
        aggregate::space_orientation(space.surfaces(), self.total_rotation_deg(space))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use crate::geom::IsClose;
    use crate::model::subsurface::SubSurfaceKind;
    use crate::model::surface::{BoundaryCondition, SurfaceType};

    fn north_wall() -> Surface {
        Surface::new(
            "wall_n",
            Vector::new(0.0, 1.0, 0.0),
            10.0,
            BoundaryCondition::Outdoors,
            SurfaceType::Wall,
        )
        .unwrap()
    }

    #[test]
    fn test_total_rotation_composes() {
        let building = Building::new("bldg", 30.0, vec![Space::new("s", 15.0, Vec::new())]);
        let space = building.space("s").unwrap();
        assert!(building.total_rotation_deg(space).is_close(45.0));
    }

    #[test]
    fn test_surface_orientation_resolved() {
        let building = Building::new("bldg", 0.0, vec![Space::new("s", 90.0, vec![north_wall()])]);
        let space = building.space("s").unwrap();
        let surface = space.surface("wall_n").unwrap();
        let res = building.surface_orientation(surface, CompassMethod::EightPoint);
        assert!(res.azimuth.unwrap().is_close(90.0));
        assert_eq!(res.orientation, Orientation::East);
    }

    #[test]
    fn test_detached_surface_is_unknown() {
        let building = Building::new("bldg", 0.0, Vec::new());
        let orphan = north_wall(); // parent never set
        let res = building.surface_orientation(&orphan, CompassMethod::EightPoint);
        assert_eq!(res.azimuth, None);
        assert_eq!(res.orientation, Orientation::Unknown);
    }

    #[test]
    fn test_sub_surface_orientation_chain() -> Result<()> {
        let mut wall = north_wall();
        wall.add_sub_surface(SubSurface::new("window", SubSurfaceKind::FixedWindow))?;
        let building = Building::new("bldg", 180.0, vec![Space::new("s", 0.0, vec![wall])]);
        let space = building.space("s").unwrap();
        let window = space.surface("wall_n").unwrap().sub_surfaces()[0];
        let res = building.sub_surface_orientation(window, CompassMethod::EightPoint);
        assert!(res.azimuth.unwrap().is_close(180.0));
        assert_eq!(res.orientation, Orientation::South);
        Ok(())
    }

    #[test]
    fn test_detached_sub_surface_is_unknown() {
        let building = Building::new("bldg", 0.0, Vec::new());
        let orphan = SubSurface::new("window", SubSurfaceKind::FixedWindow);
        let res = building.sub_surface_orientation(&orphan, CompassMethod::EightPoint);
        assert_eq!(res.azimuth, None);
        assert_eq!(res.orientation, Orientation::Unknown);
    }

    #[test]
    fn test_space_orientation_uses_both_rotations() {
        // Local north wall, space rotated 45, building rotated 45: faces east
        let building = Building::new("bldg", 45.0, vec![Space::new("s", 45.0, vec![north_wall()])]);
        let space = building.space("s").unwrap();
        assert_eq!(building.space_orientation(space), Orientation::East);
    }

    #[test]
    fn test_space_without_walls_is_interior() {
        let building = Building::new("bldg", 0.0, vec![Space::new("s", 0.0, Vec::new())]);
        let space = building.space("s").unwrap();
        assert_eq!(building.space_orientation(space), Orientation::Interior);
    }
}
