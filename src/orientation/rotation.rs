use crate::Vector;

/// Normalizes an angle in degrees into `[0, 360)`.
///
/// Works for negative angles and angles far outside a single turn.
pub fn normalize_degrees(deg: f64) -> f64 {
    let norm = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative angle can round up to exactly 360
    if norm >= 360.0 { 0.0 } else { norm }
}

/// Combines a local entity rotation with the global building rotation
/// into one absolute rotation offset from true north.
pub fn compose_rotation(local_rotation_deg: f64, building_rotation_deg: f64) -> f64 {
    normalize_degrees(local_rotation_deg + building_rotation_deg)
}

/// Rotates the horizontal (x, y) components of a normal clockwise by
/// `rotation_deg`, moving it from the local frame into the absolute frame.
///
/// The z component passes through unchanged. This is the vector form of the
/// absolute-azimuth calculation and is the only valid way to combine several
/// normals in a common frame: summing azimuth scalars breaks across the
/// 0/360 wrap.
pub fn rotate_clockwise(normal: &Vector, rotation_deg: f64) -> Vector {
    let theta = rotation_deg.to_radians();
    Vector::new(
        normal.dx * theta.cos() + normal.dy * theta.sin(),
        -normal.dx * theta.sin() + normal.dy * theta.cos(),
        normal.dz,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::IsClose;

    #[test]
    fn test_normalize_degrees() {
        assert!(normalize_degrees(0.0).is_close(0.0));
        assert!(normalize_degrees(360.0).is_close(0.0));
        assert!(normalize_degrees(725.0).is_close(5.0));
        assert!(normalize_degrees(-90.0).is_close(270.0));
        assert!(normalize_degrees(-725.0).is_close(355.0));
    }

    #[test]
    fn test_normalize_degrees_tiny_negative() {
        let norm = normalize_degrees(-1e-18);
        assert!((0.0..360.0).contains(&norm));
    }

    #[test]
    fn test_compose_rotation() {
        assert!(compose_rotation(10.0, 20.0).is_close(30.0));
        assert!(compose_rotation(350.0, 20.0).is_close(10.0));
    }

    #[test]
    fn test_compose_rotation_commutes() {
        assert!(compose_rotation(90.0, 270.0).is_close(0.0));
        assert!(compose_rotation(270.0, 90.0).is_close(0.0));
    }

    #[test]
    fn test_rotate_clockwise_quarter_turn() {
        // North-facing normal rotated 90 deg clockwise points east
        let n = Vector::new(0.0, 1.0, 0.0);
        let r = rotate_clockwise(&n, 90.0);
        assert!(r.dx.is_close(1.0));
        assert!(r.dy.is_close(0.0));
    }

    #[test]
    fn test_rotate_clockwise_keeps_z() {
        let n = Vector::new(0.3, 0.4, 0.866);
        let r = rotate_clockwise(&n, 123.0);
        assert_eq!(r.dz, 0.866);
        assert!(r.length().is_close(n.length()));
    }

    #[test]
    fn test_rotate_clockwise_full_turn() {
        let n = Vector::new(0.6, 0.8, 0.0);
        let r = rotate_clockwise(&n, 360.0);
        assert!(r.is_close(&n));
    }
}
