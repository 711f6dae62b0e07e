pub mod geom;
pub mod model;
mod name;
pub mod orientation;
pub mod report;
mod uid;

// Prelude
pub use geom::vector::Vector;
pub use model::building::Building;
pub use model::space::Space;
pub use model::subsurface::{SubSurface, SubSurfaceKind};
pub use model::surface::{BoundaryCondition, Surface, SurfaceType};
pub use name::{HasName, SortByName};
pub use orientation::classify::{ElementOrientation, SurfaceOrientation};
pub use orientation::compass::{CompassMethod, Orientation};
pub use uid::UID;
