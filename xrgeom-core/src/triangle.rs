//! Flat triangle geometry.
//!
//! A triangle is emitted as three non-indexed vertices sharing one face
//! normal. UVs come from projecting the triangle onto its own plane and
//! stretching the projection's bounding box over the unit square.

use log::{debug, warn};
use nalgebra::{Point2, Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::align::rotation_to_axis;
use crate::attrs::{parse_vec3, Properties};
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{Geometry, MeshBuffers};

/// Relative tolerance on `|AB × AC| / (|AB| |AC|)`, the sine of the angle at A
const DEGENERATE_SINE: f64 = 1e-6;

pub const DEFAULT_VERTEX_A: Point3<f32> = Point3::new(0.0, 0.5, 0.0);
pub const DEFAULT_VERTEX_B: Point3<f32> = Point3::new(-0.5, -0.5, 0.0);
pub const DEFAULT_VERTEX_C: Point3<f32> = Point3::new(0.5, -0.5, 0.0);

/// Names of the declarative properties read by [`TriangleConfig::from_properties`]
pub const VERTEX_PROPERTIES: [&str; 3] = ["vertexA", "vertexB", "vertexC"];

/// The three corners of a triangle, in winding order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TriangleConfig {
    #[serde(with = "xyz")]
    pub vertex_a: Point3<f32>,
    #[serde(with = "xyz")]
    pub vertex_b: Point3<f32>,
    #[serde(with = "xyz")]
    pub vertex_c: Point3<f32>,
}

impl TriangleConfig {
    pub fn new(vertex_a: Point3<f32>, vertex_b: Point3<f32>, vertex_c: Point3<f32>) -> Self {
        Self {
            vertex_a,
            vertex_b,
            vertex_c,
        }
    }

    /// Read `vertexA`, `vertexB` and `vertexC` from declarative properties.
    ///
    /// Absent properties keep their defaults. So do absent trailing
    /// components: `vertexA: 1` yields `(1, 0.5, 0)`.
    pub fn from_properties(props: &Properties) -> GeometryResult<Self> {
        let mut config = Self::default();
        config.apply_properties(props)?;
        Ok(config)
    }

    /// Overlay declarative properties onto this config
    pub fn apply_properties(&mut self, props: &Properties) -> GeometryResult<()> {
        for (name, value) in props.iter() {
            let slot = match name {
                "vertexA" => &mut self.vertex_a,
                "vertexB" => &mut self.vertex_b,
                "vertexC" => &mut self.vertex_c,
                "primitive" => continue,
                _ => {
                    warn!("ignoring unknown triangle property `{name}`");
                    continue;
                }
            };
            *slot = parse_vec3(value, slot).map_err(|e| match e {
                GeometryError::Parse(msg) => GeometryError::Parse(format!("{name}: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }

    pub fn vertices(&self) -> [Point3<f32>; 3] {
        [self.vertex_a, self.vertex_b, self.vertex_c]
    }

    /// Check that the triangle can be built
    pub fn validate(&self) -> GeometryResult<()> {
        face_normal(&self.vertex_a, &self.vertex_b, &self.vertex_c).map(|_| ())
    }
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VERTEX_A, DEFAULT_VERTEX_B, DEFAULT_VERTEX_C)
    }
}

impl Geometry for TriangleConfig {
    fn build(&self) -> GeometryResult<MeshBuffers> {
        build_triangle(&self.vertex_a, &self.vertex_b, &self.vertex_c)
    }
}

/// Unit normal of triangle ABC by the right-hand rule.
///
/// Fails on non-finite coordinates and on coincident or collinear vertices.
pub fn face_normal(
    a: &Point3<f32>,
    b: &Point3<f32>,
    c: &Point3<f32>,
) -> GeometryResult<Unit<Vector3<f32>>> {
    for (vertex, p) in VERTEX_PROPERTIES.into_iter().zip([a, b, c]) {
        if !p.coords.iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite { vertex });
        }
    }

    // f64 keeps the squared norms out of f32 overflow and subnormal range.
    let (a64, b64, c64) = (a.cast::<f64>(), b.cast::<f64>(), c.cast::<f64>());
    let edge1 = b64 - a64;
    let edge2 = c64 - a64;
    let cross = edge1.cross(&edge2);

    let scale = edge1.norm() * edge2.norm();
    if scale == 0.0 || cross.norm() <= DEGENERATE_SINE * scale {
        return Err(GeometryError::Degenerate {
            a: *a,
            b: *b,
            c: *c,
        });
    }

    let normal = cross / cross.norm();
    Ok(Unit::new_normalize(normal.cast::<f32>()))
}

/// Build position, normal and uv buffers for triangle ABC.
///
/// Positions are emitted untransformed and in input order.
pub fn build_triangle(
    a: &Point3<f32>,
    b: &Point3<f32>,
    c: &Point3<f32>,
) -> GeometryResult<MeshBuffers> {
    let normal = face_normal(a, b, c)?;

    // Rotate the triangle parallel to the XY plane and keep x/y.
    let rotation = rotation_to_axis(&normal, &Vector3::z_axis());
    let projected = [a, b, c].map(|p| (rotation * p).xy());

    let min = projected[0].inf(&projected[1]).inf(&projected[2]);
    let max = projected[0].sup(&projected[1]).sup(&projected[2]);
    let range = max - min;

    let uvs = projected.map(|p| {
        Point2::new(
            unit_interval(p.x, min.x, range.x),
            unit_interval(p.y, min.y, range.y),
        )
    });

    debug!("triangle {a} {b} {c}: normal {:?}, uv box {min} .. {max}", normal.into_inner());

    Ok(MeshBuffers::from_face(&[*a, *b, *c], &normal, &uvs))
}

/// Map `value` from `[min, min + range]` onto `[0, 1]`; a flat range maps to 0
fn unit_interval(value: f32, min: f32, range: f32) -> f32 {
    if range > 0.0 {
        (value - min) / range
    } else {
        0.0
    }
}

/// Serde form of a point as `{ "x": .., "y": .., "z": .. }`
mod xyz {
    use nalgebra::Point3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xyz {
        x: f32,
        y: f32,
        z: f32,
    }

    pub fn serialize<S: Serializer>(p: &Point3<f32>, serializer: S) -> Result<S::Ok, S::Error> {
        Xyz {
            x: p.x,
            y: p.y,
            z: p.z,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point3<f32>, D::Error> {
        let Xyz { x, y, z } = Xyz::deserialize(deserializer)?;
        Ok(Point3::new(x, y, z))
    }
}
