//! Mesh buffers handed to the rendering layer

use nalgebra::{Point2, Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GeometryResult;

/// Semantic role of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeName {
    Position,
    Normal,
    Uv,
}

impl AttributeName {
    pub const ALL: [AttributeName; 3] = [Self::Position, Self::Normal, Self::Uv];

    /// Name the rendering layer binds the attribute under
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::Uv => "uv",
        }
    }

    /// Number of floats per vertex
    pub fn item_size(self) -> usize {
        match self {
            Self::Position | Self::Normal => 3,
            Self::Uv => 2,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == name)
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat view over one attribute of a [`MeshBuffers`]
#[derive(Debug, Clone, Copy)]
pub struct BufferAttribute<'a> {
    pub name: AttributeName,
    pub item_size: usize,
    pub array: &'a [f32],
}

impl BufferAttribute<'_> {
    pub fn count(&self) -> usize {
        self.array.len() / self.item_size
    }
}

/// Non-indexed, flat-shaded vertex data: three parallel arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
}

impl MeshBuffers {
    /// Assemble buffers for a single flat face
    pub fn from_face(
        vertices: &[Point3<f32>; 3],
        normal: &Unit<Vector3<f32>>,
        uvs: &[Point2<f32>; 3],
    ) -> Self {
        let mut buffers = Self::with_capacity(3);
        for (vertex, uv) in vertices.iter().zip(uvs) {
            buffers.positions.extend_from_slice(&[vertex.x, vertex.y, vertex.z]);
            buffers.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
            buffers.uvs.extend_from_slice(&[uv.x, uv.y]);
        }
        buffers
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            uvs: Vec::with_capacity(vertex_count * 2),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn position(&self, index: usize) -> Point3<f32> {
        let p = &self.positions[index * 3..index * 3 + 3];
        Point3::new(p[0], p[1], p[2])
    }

    pub fn normal(&self, index: usize) -> Vector3<f32> {
        let n = &self.normals[index * 3..index * 3 + 3];
        Vector3::new(n[0], n[1], n[2])
    }

    pub fn uv(&self, index: usize) -> Point2<f32> {
        let uv = &self.uvs[index * 2..index * 2 + 2];
        Point2::new(uv[0], uv[1])
    }

    pub fn attribute(&self, name: AttributeName) -> BufferAttribute<'_> {
        let array = match name {
            AttributeName::Position => &self.positions,
            AttributeName::Normal => &self.normals,
            AttributeName::Uv => &self.uvs,
        };
        BufferAttribute {
            name,
            item_size: name.item_size(),
            array,
        }
    }

    /// Position, normal and uv attributes, in that order
    pub fn attributes(&self) -> [BufferAttribute<'_>; 3] {
        AttributeName::ALL.map(|name| self.attribute(name))
    }
}

/// Generator of mesh buffers. Implemented on geometry parameter structs.
///
/// Every call computes fresh buffers; nothing is cached between calls.
pub trait Geometry {
    fn build(&self) -> GeometryResult<MeshBuffers>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_face() -> MeshBuffers {
        MeshBuffers::from_face(
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            &Vector3::z_axis(),
            &[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
        )
    }

    #[test]
    fn test_from_face_layout() {
        let buffers = unit_face();
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.positions, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(buffers.normals, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(buffers.uvs, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(buffers.position(1), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(buffers.uv(2), Point2::new(0.0, 1.0));
    }

    #[test]
    fn test_attributes_are_tagged() {
        let buffers = unit_face();
        let attrs = buffers.attributes();
        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["position", "normal", "uv"]);
        assert_eq!(attrs[0].item_size, 3);
        assert_eq!(attrs[1].item_size, 3);
        assert_eq!(attrs[2].item_size, 2);
        assert!(attrs.iter().all(|a| a.count() == 3));
    }

    #[test]
    fn test_attribute_name_lookup() {
        assert_eq!(AttributeName::from_name("uv"), Some(AttributeName::Uv));
        assert_eq!(AttributeName::from_name("color"), None);
    }
}
