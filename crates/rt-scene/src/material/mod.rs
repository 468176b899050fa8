//! Surface descriptors.
//!
//! A [Material] only describes how a surface scatters or emits light, the
//! rendering engine is the one interpreting it.
//! Every constructor validates its numeric domain and fails with
//! [CompileError::Validation] rather than clamping.

use serde::Serialize;

use crate::{
    color::Rgb,
    math::float::{self, AsF32},
    CompileError, Result,
};

/// Prefix prepended to texture urls that must go through a CORS proxy
pub const CORS_PROXY_PREFIX: &str = "https://cors-anywhere.herokuapp.com/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Material {
    Matte {
        color: Rgb,
    },
    Metallic {
        color: Rgb,
        /// In `[0, 1]`, 0 is a perfect mirror
        fuzz: f32,
    },
    Dielectric {
        refractive_index: f32,
    },
    /// Light source, channels above 1 encode power
    Emissive {
        color: Rgb,
    },
    /// Matte surface textured with a remote image, fetched by the engine
    Textured {
        source_url: String,
    },
    Checkered {
        color_a: Rgb,
        color_b: Rgb,
        frequency: f32,
    },
}

impl Material {
    pub fn matte(color: impl Into<Rgb>) -> Result<Self> {
        Ok(Self::Matte {
            color: color.into().validated("matte color")?,
        })
    }

    /// Perfect mirror, same as `metallic_fuzzed(color, 0)`
    pub fn metallic(color: impl Into<Rgb>) -> Result<Self> {
        Self::metallic_fuzzed(color, 0.0)
    }

    pub fn metallic_fuzzed(color: impl Into<Rgb>, fuzz: impl AsF32) -> Result<Self> {
        let fuzz = fuzz.as_f32();
        if !(0.0..=1.0).contains(&fuzz) {
            return Err(CompileError::validation(
                "metallic fuzz",
                format!("{fuzz} is outside [0, 1]"),
            ));
        }

        Ok(Self::Metallic {
            color: color.into().validated("metallic color")?,
            fuzz,
        })
    }

    pub fn dielectric(refractive_index: impl AsF32) -> Result<Self> {
        Ok(Self::Dielectric {
            refractive_index: float::positive("refractive index", refractive_index)?,
        })
    }

    pub fn diffuse_color(color: impl Into<Rgb>) -> Result<Self> {
        Ok(Self::Emissive {
            color: color.into().validated("emissive color")?,
        })
    }

    /// The url is kept as an opaque string, nothing is fetched here
    pub fn image(url: impl Into<String>) -> Result<Self> {
        Ok(Self::Textured {
            source_url: non_empty_url(url.into())?,
        })
    }

    /// Like [Material::image] but the url is routed through [CORS_PROXY_PREFIX]
    pub fn proxied_image(url: impl Into<String>) -> Result<Self> {
        let url = non_empty_url(url.into())?;
        Ok(Self::Textured {
            source_url: format!("{CORS_PROXY_PREFIX}{url}"),
        })
    }

    pub fn checker(
        color_a: impl Into<Rgb>,
        color_b: impl Into<Rgb>,
        frequency: impl AsF32,
    ) -> Result<Self> {
        Ok(Self::Checkered {
            color_a: color_a.into().validated("checker color")?,
            color_b: color_b.into().validated("checker color")?,
            frequency: float::positive("checker frequency", frequency)?,
        })
    }

    pub fn is_emissive(&self) -> bool {
        matches!(self, Self::Emissive { .. })
    }
}

fn non_empty_url(url: String) -> Result<String> {
    if url.trim().is_empty() {
        Err(CompileError::validation("image url", "url is empty"))
    } else {
        Ok(url)
    }
}
