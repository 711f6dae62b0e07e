use crate::Vector;
use crate::orientation::rotation::normalize_degrees;

/// Converts the horizontal projection of an outward normal into a compass
/// angle relative to the local frame, in degrees, normalized to `[0, 360)`.
///
/// The argument order of `atan2(dx, dy)` is deliberate and load-bearing:
/// 0 deg is local north (+y) and the angle grows clockwise toward +x (east).
/// Swapping the arguments mirrors every downstream classification without
/// any error being raised, so it must never be "fixed" to the more common
/// `atan2(y, x)` form.
pub fn relative_azimuth(normal: &Vector) -> f64 {
    normalize_degrees(normal.dx.atan2(normal.dy).to_degrees())
}

/// Shifts a relative azimuth into the absolute (true-north) frame.
pub fn absolute_azimuth(relative_azimuth_deg: f64, total_rotation_deg: f64) -> f64 {
    normalize_degrees(relative_azimuth_deg + total_rotation_deg)
}
