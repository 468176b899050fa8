use serde::Serialize;

use crate::{math::vec::Vec3, CompileError, Result};

/// Linear RGB triple.
///
/// Channels are not clamped to `[0, 1]`: emissive materials encode light power
/// with values above one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0.0; 3]);

    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr)
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    pub fn splat(v: f32) -> Self {
        Self([v; 3])
    }

    /// Checks every channel is finite and non-negative
    pub fn validated(self, what: &'static str) -> Result<Self> {
        match self.0.iter().find(|c| !c.is_finite() || **c < 0.0) {
            Some(c) => Err(CompileError::validation(
                what,
                format!("channel {c} must be finite and non-negative in {:?}", self.0),
            )),
            None => Ok(self),
        }
    }
}

impl std::ops::Mul for Rgb {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
        ])
    }
}

impl std::ops::Mul<Rgb> for f32 {
    type Output = Rgb;

    fn mul(self, rhs: Rgb) -> Self::Output {
        Rgb(rhs.0.map(|c| self * c))
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(val: [f32; 3]) -> Self {
        Rgb::from_array(val)
    }
}

impl From<(f32, f32, f32)> for Rgb {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Rgb([r, g, b])
    }
}

impl From<Vec3> for Rgb {
    fn from(val: Vec3) -> Self {
        Rgb(val.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn validated() {
        assert!(Rgb::from_array([7.0, 7.0, 7.0]).validated("color").is_ok());
        assert!(Rgb::from_array([0.0, -0.1, 0.0]).validated("color").is_err());
        assert!(Rgb::from_array([f32::NAN, 0.0, 0.0]).validated("color").is_err());
        assert!(Rgb::from_array([f32::INFINITY, 0.0, 0.0]).validated("color").is_err());
    }

    #[test]
    fn channel_product() {
        let a = Rgb::from_array([0.5, 1.0, 0.0]);
        let b = Rgb::from_array([0.5, 0.2, 3.0]);
        assert_eq!(a * b, Rgb::from_array([0.25, 0.2, 0.0]));
    }
}
