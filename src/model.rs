//! In-memory building model.
//!
//! Hierarchy: Building → Space → Surface → SubSurface. Children are owned by
//! their parent container and keyed by name; each child keeps a nullable
//! `parent` back-link set when it is added. Classification only ever reads
//! this graph.

pub mod building;
pub mod space;
pub mod subsurface;
pub mod surface;
