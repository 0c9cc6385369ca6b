//! Error types for geometry construction.
//!
//! Every fallible operation in this crate returns [`GeometryResult`].

use nalgebra::Point3;
use thiserror::Error;

/// Errors produced while parsing geometry attributes or building meshes.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The three vertices are coincident or collinear, so no face normal exists.
    #[error("degenerate triangle: vertices {a}, {b}, {c} do not span a plane")]
    Degenerate {
        a: Point3<f32>,
        b: Point3<f32>,
        c: Point3<f32>,
    },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFinite { vertex: &'static str },

    /// A property string or vector value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// No builder is registered under the requested primitive name.
    #[error("unknown geometry primitive `{0}`")]
    UnknownPrimitive(String),

    /// A builder is already registered under this primitive name.
    #[error("geometry primitive `{0}` is already registered")]
    AlreadyRegistered(String),
}

/// Convenience alias for `Result<T, GeometryError>`.
pub type GeometryResult<T> = Result<T, GeometryError>;
