pub mod vector;

/// Geometric precision
pub(crate) const EPS: f64 = 1e-13;

/// Closeness check for floats compared against a reference value.
pub trait IsClose {
    fn is_close(&self, other: f64) -> bool;
}

impl IsClose for f64 {
    fn is_close(&self, other: f64) -> bool {
        (self - other).abs() < EPS
    }
}
