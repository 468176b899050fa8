//! Render configuration resolution.
//!
//! Scripts only give the options they care about as a sparse TOML mapping,
//! [resolve] fills the rest from the fixed defaults below. Top level keys merge
//! one by one while `camera`, when present, replaces the default camera as a
//! whole.

use serde::Serialize;
use toml::{Table, Value};

use crate::{
    color::Rgb,
    math::point::Point,
    shape::Shape,
    utils::log_once::warn_once,
    CompileError, Result,
};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_SAMPLES_PER_PX: u32 = 50;
pub const DEFAULT_RAYS_PER_SAMPLE: u32 = 25;
pub const DEFAULT_AMBIENT_COLOR: Rgb = Rgb::BLACK;

/// Keys accepted at the top level of an override mapping
pub const RECOGNIZED_KEYS: [&str; 6] = [
    "width",
    "height",
    "samples_per_px",
    "rays_per_sample",
    "ambient_color",
    "camera",
];

const CAMERA_KEYS: [&str; 2] = ["look_from", "look_at"];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CameraConfig {
    pub look_from: Point,
    pub look_at: Point,
}

impl CameraConfig {
    /// A camera looking at its own position has no view direction
    pub fn is_degenerate(&self) -> bool {
        self.look_from == self.look_at
    }
}

/// Fully resolved scene, owned by the engine once submitted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneConfig {
    pub world: Vec<Shape>,
    pub width: u32,
    pub height: u32,
    pub samples_per_px: u32,
    pub rays_per_sample: u32,
    pub ambient_color: Rgb,
    pub camera: CameraConfig,
}

impl SceneConfig {
    /// The default configuration around `world`
    pub fn with_defaults(world: Vec<Shape>) -> Self {
        Self {
            world,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            samples_per_px: DEFAULT_SAMPLES_PER_PX,
            rays_per_sample: DEFAULT_RAYS_PER_SAMPLE,
            ambient_color: DEFAULT_AMBIENT_COLOR,
            camera: CameraConfig::default(),
        }
    }
}

/// Merges `overrides` over the defaults.
///
/// Any key outside [RECOGNIZED_KEYS] (or outside `look_from`/`look_at` inside
/// `camera`) fails with [CompileError::UnknownConfigOption].
pub fn resolve(world: Vec<Shape>, overrides: &Table) -> Result<SceneConfig> {
    if let Some(unknown) = overrides
        .keys()
        .find(|k| !RECOGNIZED_KEYS.contains(&k.as_str()))
    {
        return Err(CompileError::UnknownConfigOption(unknown.clone()));
    }

    let mut config = SceneConfig::with_defaults(world);
    for (key, value) in overrides {
        match key.as_str() {
            "width" => config.width = positive_int("width", value)?,
            "height" => config.height = positive_int("height", value)?,
            "samples_per_px" => config.samples_per_px = positive_int("samples_per_px", value)?,
            "rays_per_sample" => config.rays_per_sample = positive_int("rays_per_sample", value)?,
            "ambient_color" => {
                config.ambient_color = Rgb::from_array(triple("ambient_color", value)?)
                    .validated("ambient_color")?
            }
            "camera" => config.camera = camera(value)?,
            other => return Err(CompileError::UnknownConfigOption(other.to_owned())),
        }
    }

    if config.camera.is_degenerate() {
        warn_once!(
            "camera looks from {:?} at the same point, the engine has to pick a view direction",
            config.camera.look_from.vec()
        );
    }

    log::debug!(
        "resolved {}x{} scene, {} spp, {} rays per sample, {} top level shapes",
        config.width,
        config.height,
        config.samples_per_px,
        config.rays_per_sample,
        config.world.len()
    );

    Ok(config)
}

/// Parses a module level configuration mapping written in TOML
pub fn parse_config(source: &str) -> Result<Table> {
    Ok(toml::from_str::<Table>(source)?)
}

/// Top level merge of two sparse mappings, keys of `extra` win.
/// A `camera` in `extra` replaces the one in `base` entirely.
pub fn merge_overrides(base: &Table, extra: &Table) -> Table {
    let mut merged = base.clone();
    for (key, value) in extra {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

fn positive_int(key: &'static str, value: &Value) -> Result<u32> {
    match value {
        Value::Integer(i) if *i > 0 => u32::try_from(*i)
            .map_err(|_| CompileError::validation(key, format!("{i} is too large"))),
        other => Err(CompileError::validation(
            key,
            format!("expected a positive integer, got {other}"),
        )),
    }
}

fn number(key: &'static str, value: &Value) -> Result<f32> {
    match value {
        Value::Integer(i) => Ok(*i as f32),
        Value::Float(f) if f.is_finite() => Ok(*f as f32),
        other => Err(CompileError::validation(
            key,
            format!("expected a finite number, got {other}"),
        )),
    }
}

fn triple(key: &'static str, value: &Value) -> Result<[f32; 3]> {
    match value.as_array().map(Vec::as_slice) {
        Some([a, b, c]) => Ok([number(key, a)?, number(key, b)?, number(key, c)?]),
        _ => Err(CompileError::validation(
            key,
            format!("expected an array of 3 numbers, got {value}"),
        )),
    }
}

fn camera(value: &Value) -> Result<CameraConfig> {
    let Some(table) = value.as_table() else {
        return Err(CompileError::validation(
            "camera",
            format!("expected a table, got {value}"),
        ));
    };

    if let Some(unknown) = table.keys().find(|k| !CAMERA_KEYS.contains(&k.as_str())) {
        return Err(CompileError::UnknownConfigOption(format!("camera.{unknown}")));
    }

    let point = |key: &'static str| -> Result<Point> {
        let value = table.get(key).ok_or_else(|| {
            CompileError::validation("camera", format!("`{key}` is required when camera is set"))
        })?;
        Ok(Point::from(triple(key, value)?))
    };

    Ok(CameraConfig {
        look_from: point("look_from")?,
        look_at: point("look_at")?,
    })
}
