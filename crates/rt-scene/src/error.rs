use std::fmt::Display;

use crate::shape::RectArgKind;

/// Every way a scene compilation can fail.
///
/// All of them are raised synchronously while the script runs, before anything
/// reaches the rendering engine.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A numeric parameter is out of its domain or an argument has the wrong arity
    #[error("invalid {what}: {reason}")]
    Validation { what: &'static str, reason: String },

    /// Rectangle argument inference found zero or several planes
    #[error("ambiguous rectangle orientation: {0}")]
    AmbiguousOrientation(OrientationMismatch),

    #[error("unknown configuration option `{0}`")]
    UnknownConfigOption(String),

    /// A lazy shape sequence failed while it was being drained
    #[error("shape sequence failed after {consumed} shapes")]
    SequenceConsumption {
        consumed: usize,
        #[source]
        source: Box<CompileError>,
    },

    #[error("malformed configuration mapping")]
    ConfigSyntax(#[from] toml::de::Error),

    /// Raised by user script code
    #[error(transparent)]
    Script(#[from] anyhow::Error),
}

impl CompileError {
    pub fn validation(what: &'static str, reason: impl Display) -> Self {
        Self::Validation {
            what,
            reason: reason.to_string(),
        }
    }
}

/// The argument kinds `rect` received and the planes they matched
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationMismatch {
    pub args: [RectArgKind; 3],
    pub matches: Vec<crate::shape::Plane>,
}

impl Display for OrientationMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = &self.args;
        write!(f, "got (x: {x}, y: {y}, z: {z}), ")?;
        if self.matches.is_empty() {
            write!(f, "expected two 2-element ranges and one scalar")
        } else {
            write!(f, "matched planes {:?}", self.matches)
        }
    }
}
