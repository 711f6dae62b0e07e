//! Area-weighted space orientation.
//!
//! A space with several exterior walls gets one representative label by
//! summing the walls' absolute normals weighted by gross area. Averaging
//! per-wall azimuths would be wrong twice over: it breaks across the 0/360
//! wrap and it cannot express two opposing walls cancelling out. The vector
//! sum handles both, but degenerates when the resultant is near zero, hence
//! the explicit tie-break below.

use crate::Vector;
use crate::model::surface::Surface;
use crate::orientation::azimuth::{absolute_azimuth, relative_azimuth};
use crate::orientation::compass::{
    CompassMethod, EIGHT_POINTS, Orientation, classify_azimuth, eight_point_index,
};
use crate::orientation::rotation::rotate_clockwise;

/// Resultant-magnitude threshold below which the vector sum is treated as
/// degenerate and the per-bucket area tie-break applies.
///
/// The unit is an area-weighted vector magnitude (m2, since normals are unit
/// length), so the default may not suit rooms of very different scale;
/// override it through [`space_orientation_with_threshold`] if needed.
pub const RESULTANT_EPS: f64 = 0.01;

/// Summarizes a space's exposure from its surfaces, using the default
/// [`RESULTANT_EPS`] threshold.
///
/// Only qualifying exterior walls (boundary condition Outdoors, surface type
/// Wall) contribute; roofs, floors and non-exterior surfaces are skipped.
/// Returns [`Orientation::Interior`] when no wall qualifies. Never fails:
/// malformed geometry resolves to a sentinel, so batch runs over a whole
/// model cannot abort on one bad space.
pub fn space_orientation<'a, I>(surfaces: I, total_rotation_deg: f64) -> Orientation
where
    I: IntoIterator<Item = &'a Surface>,
{
    space_orientation_with_threshold(surfaces, total_rotation_deg, RESULTANT_EPS)
}

/// Same as [`space_orientation`] with an explicit degeneracy threshold.
///
/// When the area-weighted resultant is shorter than `threshold`, the bucket
/// holding the largest individually classified wall area wins; among equal
/// buckets the first in clockwise compass order (north first) is returned.
/// If every bucket is empty as well, the result is Interior.
pub fn space_orientation_with_threshold<'a, I>(
    surfaces: I,
    total_rotation_deg: f64,
    threshold: f64,
) -> Orientation
where
    I: IntoIterator<Item = &'a Surface>,
{
    let mut resultant = Vector::new(0.0, 0.0, 0.0);
    let mut bucket_areas = [0.0_f64; 8];
    let mut qualifying = 0_usize;

    for wall in surfaces.into_iter().filter(|s| s.is_exterior_wall()) {
        qualifying += 1;
        let area = wall.gross_area();
        resultant = resultant + rotate_clockwise(wall.outward_normal(), total_rotation_deg) * area;

        // Per-bucket totals feed the tie-break only; always 8-point.
        let az = absolute_azimuth(relative_azimuth(wall.outward_normal()), total_rotation_deg);
        bucket_areas[eight_point_index(az)] += area;
    }

    if qualifying == 0 {
        return Orientation::Interior;
    }

    if resultant.horizontal_length() < threshold {
        let mut best = 0;
        for idx in 1..bucket_areas.len() {
            if bucket_areas[idx] > bucket_areas[best] {
                best = idx;
            }
        }
        if bucket_areas[best] <= 0.0 {
            return Orientation::Interior;
        }
        return EIGHT_POINTS[best];
    }

    // The resultant already sits in the absolute frame, so the normal-to-
    // azimuth conversion applies to it directly.
    classify_azimuth(relative_azimuth(&resultant), CompassMethod::EightPoint)
}
