use std::ops::{Add, Sub};

use glam::Vec3;
use serde::Serialize;

use super::vec::Vec3FiniteExt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point(pub Vec3);

impl Point {
    pub const ORIGIN: Point = Point(Vec3::ZERO);
    pub fn vec(self) -> Vec3 {
        self.0
    }

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn validated(self, what: &'static str) -> crate::Result<Self> {
        self.0.validated(what).map(Point)
    }
}

impl From<[f32; 3]> for Point {
    fn from(val: [f32; 3]) -> Self {
        Point(Vec3::from_array(val))
    }
}

impl From<(f32, f32, f32)> for Point {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Point::new(x, y, z)
    }
}

impl From<Vec3> for Point {
    fn from(val: Vec3) -> Self {
        Point(val)
    }
}

impl Add<Vec3> for Point {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() + rhs)
    }
}

impl Sub<Vec3> for Point {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() - rhs)
    }
}

/// We can sub two points but not add them
impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.vec() - rhs.vec()
    }
}
