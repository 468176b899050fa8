use glam::Vec3;
use serde::Serialize;

use super::point::Point;

/// Axis Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub origin: Point,
    /// Should have all coordinates >= 0
    pub diag: Vec3,
}

impl Bounds {
    pub fn from_points(a: Point, b: Point) -> Self {
        let origin = Point(a.vec().min(b.vec()));
        let end = Point(a.vec().max(b.vec()));

        Self {
            origin,
            diag: end - origin,
        }
    }

    /// Smallest bounds containing every point of `points`, `None` if there is none
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Bounds::from_points(first, first), |b, p| {
            b.union(&Bounds::from_points(p, p))
        }))
    }

    pub fn end(&self) -> Point {
        self.origin + self.diag
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::from_points(
            Point(self.origin.vec().min(other.origin.vec())),
            Point(self.end().vec().max(other.end().vec())),
        )
    }

    pub fn corners(&self) -> [Point; 8] {
        let (a, b) = (self.origin.vec(), self.end().vec());
        [
            Point::new(a.x, a.y, a.z),
            Point::new(b.x, a.y, a.z),
            Point::new(a.x, b.y, a.z),
            Point::new(b.x, b.y, a.z),
            Point::new(a.x, a.y, b.z),
            Point::new(b.x, a.y, b.z),
            Point::new(a.x, b.y, b.z),
            Point::new(b.x, b.y, b.z),
        ]
    }
}
