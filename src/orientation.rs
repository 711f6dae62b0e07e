//! Compass-direction exposure of building elements.
//!
//! The pipeline is: compose the local and building rotations into one offset
//! ([`rotation::compose_rotation`]), convert an outward normal into a relative
//! azimuth ([`azimuth::relative_azimuth`]), shift it into the absolute frame
//! ([`azimuth::absolute_azimuth`]), and bucket it into a compass label
//! ([`compass::classify_azimuth`]). Whole spaces are summarized by the
//! area-weighted resultant in [`aggregate`].
//!
//! Everything here is a pure function over explicit inputs; results are
//! recomputed on every call and the geometry graph is never mutated.

pub mod aggregate;
pub mod azimuth;
pub mod classify;
pub mod compass;
pub mod rotation;
