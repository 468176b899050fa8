//! Geometry descriptors handed to the rendering engine:
//! - Spheres
//! - Cylinders
//! - Axis aligned rectangles
//! - Boxes
//! - Hierarchy nodes grouping other shapes
//!
//! A [Shape] is immutable. Every transform operation (`flip_normals`,
//! `rotate_*`, `translate`, `constant_medium`) returns a new descriptor that
//! wraps the original one, which stays valid and unchanged. Wrapped shapes and
//! children are reference counted so the wrapping never copies a subtree.

pub mod rect;

pub use rect::{Plane, Rect, RectArg, RectArgKind};

use std::sync::Arc;

use glam::Vec3;
use serde::Serialize;

use crate::{
    aggregate::HierarchyNode,
    color::Rgb,
    material::Material,
    math::{
        bounds::Bounds,
        float::{self, AsF32},
        point::Point,
        transform::{Transform, TransformOp, Transformer},
        vec::{Axis, Vec3FiniteExt},
    },
    CompileError, Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sphere {
    center: Point,
    radius: f32,
    material: Material,
}

impl Sphere {
    pub fn center(&self) -> Point {
        self.center
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// Vertical cylinder standing on `base`, capped at `base.y + height`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cylinder {
    base: Point,
    height: f32,
    radius: f32,
    material: Material,
}

impl Cylinder {
    pub fn base(&self) -> Point {
        self.base
    }
    pub fn height(&self) -> f32 {
        self.height
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// Axis aligned box, the engine builds its six faces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitBox {
    min: Point,
    max: Point,
    material: Material,
}

impl HitBox {
    pub fn min(&self) -> Point {
        self.min
    }
    pub fn max(&self) -> Point {
        self.max
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// A shape with its accumulated rigid transform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transformed {
    shape: Arc<Shape>,
    transform: Transform,
}

impl Transformed {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

/// Participating medium of constant density filling `boundary`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantMedium {
    boundary: Arc<Shape>,
    density: f32,
    color: Rgb,
}

impl ConstantMedium {
    pub fn boundary(&self) -> &Shape {
        &self.boundary
    }
    pub fn density(&self) -> f32 {
        self.density
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Rect(Rect),
    Box(HitBox),
    Node(HierarchyNode),
    Transformed(Transformed),
    /// Normals of the inner shape point inward. Rects flip their own flag instead.
    Flipped(Arc<Shape>),
    ConstantMedium(ConstantMedium),
}

impl Shape {
    pub fn sphere(center: impl Into<Point>, radius: impl AsF32, material: Material) -> Result<Self> {
        Ok(Self::Sphere(Sphere {
            center: center.into().validated("sphere center")?,
            radius: float::positive("sphere radius", radius)?,
            material,
        }))
    }

    pub fn cylinder(
        base: impl Into<Point>,
        height: impl AsF32,
        radius: impl AsF32,
        material: Material,
    ) -> Result<Self> {
        Ok(Self::Cylinder(Cylinder {
            base: base.into().validated("cylinder base")?,
            height: float::positive("cylinder height", height)?,
            radius: float::positive("cylinder radius", radius)?,
            material,
        }))
    }

    pub fn hitbox(min: impl Into<Point>, max: impl Into<Point>, material: Material) -> Result<Self> {
        let min = min.into().validated("box min")?;
        let max = max.into().validated("box max")?;
        if !min.vec().cmple(max.vec()).all() {
            return Err(CompileError::validation(
                "box corners",
                format!("min {} is not below max {}", min.vec(), max.vec()),
            ));
        }

        Ok(Self::Box(HitBox { min, max, material }))
    }

    /// Rectangle whose plane is inferred from which argument is a scalar.
    ///
    /// Exactly two arguments must be 2-element ranges and the remaining one a
    /// scalar offset, see [rect::infer_orientation].
    pub fn rect(
        x: impl Into<RectArg>,
        y: impl Into<RectArg>,
        z: impl Into<RectArg>,
        material: Material,
    ) -> Result<Self> {
        Rect::infer([x.into(), y.into(), z.into()], material).map(Self::Rect)
    }

    pub fn xy_rect(x: [f32; 2], y: [f32; 2], z: f32, material: Material) -> Result<Self> {
        Self::rect(x, y, z, material)
    }

    pub fn xz_rect(x: [f32; 2], z: [f32; 2], y: f32, material: Material) -> Result<Self> {
        Self::rect(x, y, z, material)
    }

    pub fn yz_rect(y: [f32; 2], z: [f32; 2], x: f32, material: Material) -> Result<Self> {
        Self::rect(x, y, z, material)
    }

    /// Group of shapes, see [crate::aggregate::hierarchy_node]
    pub fn hierarchy_node(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self::Node(crate::aggregate::hierarchy_node(shapes))
    }

    /// Group of shapes drained from a fallible lazy sequence, see
    /// [crate::aggregate::try_hierarchy_node]
    pub fn try_hierarchy_node(shapes: impl IntoIterator<Item = Result<Shape>>) -> Result<Self> {
        crate::aggregate::try_hierarchy_node(shapes).map(Self::Node)
    }

    /// Reverse the side the normals point to. Applying it twice gives back an equal shape.
    pub fn flip_normals(&self) -> Self {
        match self {
            Shape::Rect(rect) => Shape::Rect(rect.flipped()),
            Shape::Flipped(inner) => (**inner).clone(),
            Shape::Transformed(Transformed { shape, transform }) => Shape::Transformed(Transformed {
                shape: Arc::new(shape.flip_normals()),
                transform: transform.clone(),
            }),
            _ => Shape::Flipped(Arc::new(self.clone())),
        }
    }

    pub fn rotate_x(&self, degrees: impl AsF32) -> Result<Self> {
        self.rotate(Axis::X, degrees)
    }

    pub fn rotate_y(&self, degrees: impl AsF32) -> Result<Self> {
        self.rotate(Axis::Y, degrees)
    }

    pub fn rotate_z(&self, degrees: impl AsF32) -> Result<Self> {
        self.rotate(Axis::Z, degrees)
    }

    fn rotate(&self, axis: Axis, degrees: impl AsF32) -> Result<Self> {
        let degrees = float::finite("rotation angle", degrees)?;
        Ok(self.transformed(TransformOp::Rotate { axis, degrees }))
    }

    pub fn translate(&self, offset: impl Into<Vec3>) -> Result<Self> {
        let offset = offset.into().validated("translation")?;
        Ok(self.transformed(TransformOp::Translate(offset)))
    }

    /// Appends `op` to the accumulated transform, wrapping untransformed shapes
    fn transformed(&self, op: TransformOp) -> Self {
        match self {
            Shape::Transformed(Transformed { shape, transform }) => Shape::Transformed(Transformed {
                shape: shape.clone(),
                transform: transform.then(op),
            }),
            _ => Shape::Transformed(Transformed {
                shape: Arc::new(self.clone()),
                transform: Transform::default().then(op),
            }),
        }
    }

    pub fn constant_medium(&self, density: impl AsF32, color: impl Into<Rgb>) -> Result<Self> {
        Ok(Shape::ConstantMedium(ConstantMedium {
            boundary: Arc::new(self.clone()),
            density: float::positive("medium density", density)?,
            color: color.into().validated("medium color")?,
        }))
    }

    /// Axis aligned bounds, `None` for an empty hierarchy node
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Sphere(Sphere { center, radius, .. }) => Some(Bounds::from_points(
                *center - Vec3::splat(*radius),
                *center + Vec3::splat(*radius),
            )),
            Shape::Cylinder(Cylinder {
                base,
                height,
                radius,
                ..
            }) => Some(Bounds::from_points(
                *base - Vec3::new(*radius, 0.0, *radius),
                *base + Vec3::new(*radius, *height, *radius),
            )),
            Shape::Rect(rect) => Some(rect.bounds()),
            Shape::Box(HitBox { min, max, .. }) => Some(Bounds::from_points(*min, *max)),
            Shape::Node(node) => node.bounds(),
            Shape::Transformed(Transformed { shape, transform }) => {
                let inner = shape.bounds()?;
                Bounds::enclosing(inner.corners().map(|c| transform.apply(c)))
            }
            Shape::Flipped(inner) => inner.bounds(),
            Shape::ConstantMedium(medium) => medium.boundary.bounds(),
        }
    }

    /// Number of descriptors in this subtree, wrappers included
    pub fn descriptor_count(&self) -> usize {
        1 + match self {
            Shape::Node(node) => node.children().iter().map(Shape::descriptor_count).sum(),
            Shape::Transformed(Transformed { shape, .. }) => shape.descriptor_count(),
            Shape::Flipped(inner) => inner.descriptor_count(),
            Shape::ConstantMedium(medium) => medium.boundary.descriptor_count(),
            _ => 0,
        }
    }
}
