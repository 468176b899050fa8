//! Axis aligned rectangles and the inference of their plane from loosely
//! ordered arguments.
//!
//! `rect(x, y, z, material)` receives two ranges and one scalar, the scalar
//! position tells which axis the rectangle is orthogonal to. Three typed
//! parse attempts are run in a fixed order and exactly one must succeed.

use std::fmt::Display;

use serde::Serialize;

use crate::{
    error::OrientationMismatch,
    material::Material,
    math::{bounds::Bounds, point::Point, vec::Axis},
    CompileError, Result,
};

/// Half thickness given to rectangles bounds along their normal
pub const RECT_THICKNESS: f32 = 1e-4;

/// The plane a rectangle lies in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

impl Plane {
    /// Axes spanned by `range_a` and `range_b`
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            Plane::XY => (Axis::X, Axis::Y),
            Plane::XZ => (Axis::X, Axis::Z),
            Plane::YZ => (Axis::Y, Axis::Z),
        }
    }

    pub fn normal_axis(self) -> Axis {
        match self {
            Plane::XY => Axis::Z,
            Plane::XZ => Axis::Y,
            Plane::YZ => Axis::X,
        }
    }
}

/// One positional argument of `rect`, either a scalar or a sequence of numbers
#[derive(Debug, Clone, PartialEq)]
pub enum RectArg {
    Scalar(f32),
    Seq(Vec<f32>),
}

/// Coarse description of a [RectArg], used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectArgKind {
    Scalar,
    Range,
    /// A sequence that is not a 2-element range
    Sequence(usize),
    NonFinite,
}

impl Display for RectArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RectArgKind::Scalar => write!(f, "scalar"),
            RectArgKind::Range => write!(f, "range"),
            RectArgKind::Sequence(len) => write!(f, "{len}-element sequence"),
            RectArgKind::NonFinite => write!(f, "non-finite value"),
        }
    }
}

impl RectArg {
    pub fn kind(&self) -> RectArgKind {
        match self {
            RectArg::Scalar(f) if f.is_finite() => RectArgKind::Scalar,
            RectArg::Seq(seq) if seq.iter().any(|f| !f.is_finite()) => RectArgKind::NonFinite,
            RectArg::Seq(seq) if seq.len() == 2 => RectArgKind::Range,
            RectArg::Seq(seq) => RectArgKind::Sequence(seq.len()),
            RectArg::Scalar(_) => RectArgKind::NonFinite,
        }
    }

    fn as_scalar(&self) -> Option<f32> {
        match (self, self.kind()) {
            (RectArg::Scalar(f), RectArgKind::Scalar) => Some(*f),
            _ => None,
        }
    }

    fn as_range(&self) -> Option<[f32; 2]> {
        match (self, self.kind()) {
            (RectArg::Seq(seq), RectArgKind::Range) => Some([seq[0], seq[1]]),
            _ => None,
        }
    }
}

macro_rules! scalar_rect_arg {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RectArg {
                fn from(val: $t) -> Self {
                    RectArg::Scalar(val as f32)
                }
            }

            impl From<($t, $t)> for RectArg {
                fn from((a, b): ($t, $t)) -> Self {
                    RectArg::Seq(vec![a as f32, b as f32])
                }
            }

            impl<const N: usize> From<[$t; N]> for RectArg {
                fn from(val: [$t; N]) -> Self {
                    RectArg::Seq(val.iter().map(|v| *v as f32).collect())
                }
            }
        )*
    };
}

scalar_rect_arg!(f32, f64, i32, i64);

impl From<Vec<f32>> for RectArg {
    fn from(val: Vec<f32>) -> Self {
        RectArg::Seq(val)
    }
}

impl From<&[f32]> for RectArg {
    fn from(val: &[f32]) -> Self {
        RectArg::Seq(val.to_vec())
    }
}

/// Successful parse of the three arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub plane: Plane,
    pub range_a: [f32; 2],
    pub range_b: [f32; 2],
    pub offset: f32,
}

/// Parse attempts in order: the plane, the argument slots holding its two
/// ranges and the slot holding the offset
const ATTEMPTS: [(Plane, [usize; 2], usize); 3] = [
    (Plane::XY, [0, 1], 2),
    (Plane::XZ, [0, 2], 1),
    (Plane::YZ, [1, 2], 0),
];

/// Runs every parse attempt, exactly one of them must succeed
pub fn infer_orientation(args: &[RectArg; 3]) -> Result<Orientation, OrientationMismatch> {
    let parsed: Vec<Orientation> = ATTEMPTS
        .iter()
        .filter_map(|&(plane, [a, b], offset)| {
            Some(Orientation {
                plane,
                range_a: args[a].as_range()?,
                range_b: args[b].as_range()?,
                offset: args[offset].as_scalar()?,
            })
        })
        .collect();

    match parsed.as_slice() {
        [orientation] => Ok(*orientation),
        _ => Err(OrientationMismatch {
            args: [args[0].kind(), args[1].kind(), args[2].kind()],
            matches: parsed.iter().map(|o| o.plane).collect(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    plane: Plane,
    range_a: [f32; 2],
    range_b: [f32; 2],
    offset: f32,
    material: Material,
    normal_flipped: bool,
}

impl Rect {
    pub fn new(orientation: Orientation, material: Material) -> Self {
        let Orientation {
            plane,
            range_a,
            range_b,
            offset,
        } = orientation;
        Self {
            plane,
            range_a,
            range_b,
            offset,
            material,
            normal_flipped: false,
        }
    }

    pub(crate) fn infer(args: [RectArg; 3], material: Material) -> Result<Self> {
        infer_orientation(&args)
            .map(|orientation| Self::new(orientation, material))
            .map_err(CompileError::AmbiguousOrientation)
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn range_a(&self) -> [f32; 2] {
        self.range_a
    }

    pub fn range_b(&self) -> [f32; 2] {
        self.range_b
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn normal_flipped(&self) -> bool {
        self.normal_flipped
    }

    pub(crate) fn flipped(&self) -> Self {
        Self {
            normal_flipped: !self.normal_flipped,
            ..self.clone()
        }
    }

    pub fn bounds(&self) -> Bounds {
        let (a, b) = self.plane.axes();
        let normal = self.plane.normal_axis();

        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        min[a.index()] = self.range_a[0];
        max[a.index()] = self.range_a[1];
        min[b.index()] = self.range_b[0];
        max[b.index()] = self.range_b[1];
        min[normal.index()] = self.offset - RECT_THICKNESS;
        max[normal.index()] = self.offset + RECT_THICKNESS;

        Bounds::from_points(Point::from(min), Point::from(max))
    }
}

#[cfg(test)]
mod tests {
    use super::{infer_orientation, Plane, RectArg, RectArgKind};

    fn args(x: impl Into<RectArg>, y: impl Into<RectArg>, z: impl Into<RectArg>) -> [RectArg; 3] {
        [x.into(), y.into(), z.into()]
    }

    #[test]
    fn each_plane_has_one_interpretation() {
        let xy = infer_orientation(&args((0, 600), (0, 600), 600)).unwrap();
        assert_eq!(xy.plane, Plane::XY);
        assert_eq!(xy.range_a, [0.0, 600.0]);
        assert_eq!(xy.range_b, [0.0, 600.0]);
        assert_eq!(xy.offset, 600.0);

        let xz = infer_orientation(&args((100, 500), 599, (100, 400))).unwrap();
        assert_eq!(xz.plane, Plane::XZ);
        assert_eq!(xz.range_a, [100.0, 500.0]);
        assert_eq!(xz.range_b, [100.0, 400.0]);
        assert_eq!(xz.offset, 599.0);

        let yz = infer_orientation(&args(0.5, (0.0, 1.0), [-1.0, 1.0])).unwrap();
        assert_eq!(yz.plane, Plane::YZ);
        assert_eq!(yz.range_a, [0.0, 1.0]);
        assert_eq!(yz.range_b, [-1.0, 1.0]);
        assert_eq!(yz.offset, 0.5);
    }

    #[test]
    fn no_interpretation() {
        let err = infer_orientation(&args(1, 2, 3)).unwrap_err();
        assert!(err.matches.is_empty());
        assert_eq!(err.args, [RectArgKind::Scalar; 3]);

        let err = infer_orientation(&args((0, 1), (0, 1), (0, 1))).unwrap_err();
        assert!(err.matches.is_empty());
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = infer_orientation(&args([0, 1, 2], (0, 1), 5)).unwrap_err();
        assert_eq!(err.args[0], RectArgKind::Sequence(3));
        assert!(err.matches.is_empty());

        let err = infer_orientation(&args(Vec::<f32>::new(), (0, 1), 5)).unwrap_err();
        assert_eq!(err.args[0], RectArgKind::Sequence(0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = infer_orientation(&args((0.0, f32::NAN), (0, 1), 5)).unwrap_err();
        assert_eq!(err.args[0], RectArgKind::NonFinite);

        assert!(infer_orientation(&args((0, 1), (0, 1), f32::INFINITY)).is_err());
    }
}
