pub use glam::Vec3;

use serde::Serialize;

/// One of the three world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

pub trait Vec3FiniteExt: Sized {
    fn validated(self, what: &'static str) -> crate::Result<Self>;
}

impl Vec3FiniteExt for Vec3 {
    fn validated(self, what: &'static str) -> crate::Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(crate::CompileError::validation(
                what,
                format!("{self} has a non-finite component"),
            ))
        }
    }
}
