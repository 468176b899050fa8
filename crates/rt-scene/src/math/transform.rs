use glam::{Mat4, Vec3};
use serde::Serialize;

use super::{point::Point, vec::Axis};

/// A single rigid operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TransformOp {
    Rotate { axis: Axis, degrees: f32 },
    Translate(Vec3),
}

impl TransformOp {
    pub fn into_matrix(self) -> Mat4 {
        match self {
            TransformOp::Rotate { axis, degrees } => {
                let angle = degrees.to_radians();
                match axis {
                    Axis::X => Mat4::from_rotation_x(angle),
                    Axis::Y => Mat4::from_rotation_y(angle),
                    Axis::Z => Mat4::from_rotation_z(angle),
                }
            }
            TransformOp::Translate(offset) => Mat4::from_translation(offset),
        }
    }
}

/// Ordered list of rigid operations, first pushed is applied first
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Transform(Vec<TransformOp>);

pub trait Transformer<T> {
    fn apply(&self, v: T) -> T;
}

impl Transform {
    pub fn ops(&self) -> &[TransformOp] {
        &self.0
    }

    /// New transform with `op` applied after every existing op
    pub fn then(&self, op: TransformOp) -> Self {
        let mut ops = self.0.clone();
        ops.push(op);
        Self(ops)
    }

    /// Composes the ops so that the matrix applies them in push order
    pub fn into_matrix(&self) -> Mat4 {
        self.0
            .iter()
            .fold(Mat4::IDENTITY, |acc, op| op.into_matrix() * acc)
    }
}

impl FromIterator<TransformOp> for Transform {
    fn from_iter<I: IntoIterator<Item = TransformOp>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Transformer<Vec3> for Transform {
    /// Apply rotations but not translations !
    fn apply(&self, v: Vec3) -> Vec3 {
        self.into_matrix().transform_vector3(v)
    }
}

impl Transformer<Point> for Transform {
    fn apply(&self, v: Point) -> Point {
        Point(self.into_matrix().transform_point3(v.vec()))
    }
}
