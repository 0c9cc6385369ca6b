//! xrgeom core library - flat triangle geometry for a WebXR entity framework
//!
//! Builds position, normal and uv buffers for the `triangle` geometry
//! primitive, from three vertices or from a declarative property string.

pub mod align;
pub mod attrs;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod triangle;

// Re-export commonly used types
pub use align::{align_normal_to_axis, rotation_to_axis};
pub use attrs::{parse_properties, parse_vec3, Properties};
pub use error::{GeometryError, GeometryResult};
pub use geometry::{AttributeName, BufferAttribute, Geometry, MeshBuffers};
pub use registry::GeometryRegistry;
pub use triangle::{build_triangle, face_normal, TriangleConfig};
