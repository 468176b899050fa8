//! Declarative scene compilation for a ray tracer.
//!
//! Scene scripts build [`material::Material`] and [`shape::Shape`] descriptors,
//! optionally driven by a seeded [`generator::Generator`], and the
//! [`scene::compile`] driver resolves them with a sparse configuration into one
//! [`config::SceneConfig`] that is handed to a [`scene::RenderEngine`].
//!
//! Nothing in this crate renders pixels: descriptors are plain immutable data.

pub mod aggregate;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod material;
pub mod math;
pub mod scene;
pub mod shape;
pub mod utils;

pub use error::CompileError;
pub use rand_xoshiro::Xoshiro256StarStar as Rng;

pub type Result<T, E = CompileError> = std::result::Result<T, E>;

/// Everything a scene script usually needs
pub mod prelude {
    pub use crate::{
        color::Rgb,
        config::{CameraConfig, SceneConfig},
        generator::Generator,
        material::Material,
        math::{point::Point, vec::Vec3},
        scene::SceneScript,
        shape::{RectArg, Shape},
        CompileError, Result,
    };
}
