use crate::geom::EPS;
use std::fmt;
use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Vector {
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    /// Returns the length of the vector.
    pub fn length(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2) + self.dz.powi(2)).sqrt()
    }

    /// Returns the length of the horizontal (x, y) projection.
    pub fn horizontal_length(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }

    pub fn is_close(&self, other: &Self) -> bool {
        (self.dx - other.dx).abs() < EPS
            && (self.dy - other.dy).abs() < EPS
            && (self.dz - other.dz).abs() < EPS
    }

    /// Normalizes the vector (divides by its length) and returns a copy.
    pub fn normalize(&self) -> Option<Self> {
        let len = self.length();
        if len < EPS {
            None
        } else {
            Some(Self {
                dx: self.dx / len,
                dy: self.dy / len,
                dz: self.dz / len,
            })
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2); // Default 2 decimals
        write!(
            f,
            "Vector({:.prec$}, {:.prec$}, {:.prec$})",
            self.dx,
            self.dy,
            self.dz,
            prec = prec
        )
    }
}

// Implement +
impl Add for Vector {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
            dz: self.dz + other.dz,
        }
    }
}

// Implement * for scalar weights
impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, scale: f64) -> Self {
        Self {
            dx: self.dx * scale,
            dy: self.dy * scale,
            dz: self.dz * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::IsClose;

    #[test]
    fn test_length() {
        let v = Vector::new(3.0, 4.0, 0.0);
        assert!(v.length().is_close(5.0));
    }

    #[test]
    fn test_horizontal_length_ignores_z() {
        let v = Vector::new(3.0, 4.0, 12.0);
        assert!(v.horizontal_length().is_close(5.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(0.0, 2.0, 0.0);
        let n = v.normalize().unwrap();
        assert!(n.is_close(&Vector::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_normalize_zero_length() {
        let v = Vector::new(0.0, 0.0, 0.0);
        assert!(v.normalize().is_none());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(0.5, 0.5, 0.5);
        assert!((a + b).is_close(&Vector::new(1.5, 2.5, 3.5)));
        assert!((a * 2.0).is_close(&Vector::new(2.0, 4.0, 6.0)));
    }
}
