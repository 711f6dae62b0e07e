use crate::Vector;
use crate::model::subsurface::SubSurface;
use crate::name::HasName;
use crate::uid::UID;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What lies on the outside face of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryCondition {
    /// Exposed to ambient air.
    Outdoors,
    /// In contact with the ground.
    Ground,
    /// No heat or air transfer across the boundary.
    Adiabatic,
    /// Adjacent to another surface (interior partition or party wall).
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    Wall,
    RoofCeiling,
    Floor,
}

/// A planar building surface with an outward-facing unit normal.
#[derive(Debug, Clone)]
pub struct Surface {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    outward_normal: Vector,
    gross_area: f64,
    pub boundary_condition: BoundaryCondition,
    pub surface_type: SurfaceType,
    sub_surfaces: HashMap<String, SubSurface>,
}

impl HasName for Surface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Surface {
    /// Creates a surface. The normal is normalized to unit length;
    /// a zero-length normal or a negative area is rejected.
    pub fn new(
        name: &str,
        outward_normal: Vector,
        gross_area: f64,
        boundary_condition: BoundaryCondition,
        surface_type: SurfaceType,
    ) -> Result<Self> {
        let outward_normal = outward_normal
            .normalize()
            .ok_or_else(|| anyhow!("Surface normal has zero length: {}", name))?;
        if gross_area < 0.0 {
            return Err(anyhow!("Surface area must be non-negative: {}", name));
        }
        Ok(Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            outward_normal,
            gross_area,
            boundary_condition,
            surface_type,
            sub_surfaces: HashMap::new(),
        })
    }

    /// Outward unit normal in the local, un-rotated frame of the parent space.
    pub fn outward_normal(&self) -> &Vector {
        &self.outward_normal
    }

    /// Gross area in m2.
    pub fn gross_area(&self) -> f64 {
        self.gross_area
    }

    /// True for walls exposed to ambient air. Only these qualify for the
    /// space-level orientation aggregate.
    pub fn is_exterior_wall(&self) -> bool {
        self.boundary_condition == BoundaryCondition::Outdoors
            && self.surface_type == SurfaceType::Wall
    }

    pub fn sub_surfaces(&self) -> Vec<&SubSurface> {
        self.sub_surfaces.values().collect()
    }

    pub fn add_sub_surface(&mut self, mut sub_surface: SubSurface) -> Result<()> {
        if self.sub_surfaces.contains_key(&sub_surface.name) {
            return Err(anyhow!(
                "Sub-surface is already present: {}",
                &sub_surface.name
            ));
        }
        sub_surface.parent = Some(self.uid.clone());
        self.sub_surfaces
            .insert(sub_surface.name.clone(), sub_surface);

        Ok(())
    }
}
