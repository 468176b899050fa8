use crate::{CompileError, Result};

/// Coercion of script numbers into `f32`.
///
/// Scripts write `80` as often as `80.0`; both must be accepted wherever a
/// float parameter is expected.
pub trait AsF32: Copy {
    fn as_f32(self) -> f32;
}

macro_rules! impl_as_f32 {
    ($($t:ty),*) => {
        $(
            impl AsF32 for $t {
                fn as_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_as_f32!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

pub trait FloatAsExt {
    /// Returns `Some(f)` is f is finite else returns None
    /// The result value is guaranted to be finite
    ///
    /// Returns None for NaN and +/- infty
    fn into_finite(self) -> Option<f32>;

    /// Returns `Some(f)` if f is finite and strictly positive
    fn into_positive(self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_finite(self) -> Option<f32> {
        self.is_finite().then_some(self)
    }

    fn into_positive(self) -> Option<f32> {
        self.into_finite().filter(|f| *f > 0.0)
    }
}

pub fn finite(what: &'static str, value: impl AsF32) -> Result<f32> {
    let value = value.as_f32();
    value
        .into_finite()
        .ok_or_else(|| CompileError::validation(what, format!("{value} is not finite")))
}

pub fn positive(what: &'static str, value: impl AsF32) -> Result<f32> {
    let value = value.as_f32();
    value
        .into_positive()
        .ok_or_else(|| CompileError::validation(what, format!("{value} must be > 0")))
}
