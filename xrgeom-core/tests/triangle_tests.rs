//! Integration tests for triangle geometry.

use nalgebra::{Point3, Vector3};
use xrgeom_core::{
    align_normal_to_axis, build_triangle, face_normal, AttributeName, Geometry, GeometryError,
    GeometryRegistry, TriangleConfig,
};

const EPS: f32 = 1e-5;

fn sample_triangles() -> Vec<[Point3<f32>; 3]> {
    vec![
        [
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(-0.5, -0.5, 0.0),
            Point3::new(0.5, -0.5, 0.0),
        ],
        [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ],
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 3.0, 0.0),
        ],
        [
            Point3::new(-2.0, 1.0, 5.0),
            Point3::new(3.0, -1.5, 4.0),
            Point3::new(0.25, 7.0, -3.0),
        ],
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ],
    ]
}

// ─── Normals ──────────────────────────────────────────────────

#[test]
fn normals_are_identical_and_unit() {
    for [a, b, c] in sample_triangles() {
        let mesh = build_triangle(&a, &b, &c).unwrap();
        assert_eq!(mesh.normals.len(), 9);
        assert_eq!(mesh.normal(0), mesh.normal(1));
        assert_eq!(mesh.normal(1), mesh.normal(2));
        assert!((mesh.normal(0).norm() - 1.0).abs() < EPS);
    }
}

#[test]
fn normal_is_perpendicular_to_edges() {
    for [a, b, c] in sample_triangles() {
        let n = face_normal(&a, &b, &c).unwrap();
        assert!(n.dot(&(b - a)).abs() < 1e-4);
        assert!(n.dot(&(c - a)).abs() < 1e-4);
        // Right-hand rule
        assert!(n.dot(&(b - a).cross(&(c - a))) > 0.0);
    }
}

// ─── Positions and UVs ────────────────────────────────────────

#[test]
fn positions_keep_input_order() {
    for [a, b, c] in sample_triangles() {
        let mesh = build_triangle(&a, &b, &c).unwrap();
        assert_eq!(mesh.position(0), a);
        assert_eq!(mesh.position(1), b);
        assert_eq!(mesh.position(2), c);
    }
}

#[test]
fn uvs_fill_the_unit_square() {
    for [a, b, c] in sample_triangles() {
        let mesh = build_triangle(&a, &b, &c).unwrap();
        assert_eq!(mesh.uvs.len(), 6);

        let us: Vec<f32> = (0..3).map(|i| mesh.uv(i).x).collect();
        let vs: Vec<f32> = (0..3).map(|i| mesh.uv(i).y).collect();
        for axis in [&us, &vs] {
            assert!(axis.iter().all(|t| (-EPS..=1.0 + EPS).contains(t)));
        }

        let spans = |axis: &[f32]| {
            axis.iter().any(|t| t.abs() < EPS) && axis.iter().any(|t| (t - 1.0).abs() < EPS)
        };
        assert!(spans(&us) || spans(&vs), "uvs {:?}", mesh.uvs);
    }
}

#[test]
fn uvs_preserve_planar_shape() {
    // A right triangle in the XZ plane keeps its right angle in UV space
    // once the bounding box is square.
    let mesh = build_triangle(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(0.0, 0.0, 1.0),
        &Point3::new(1.0, 0.0, 0.0),
    )
    .unwrap();
    let (uv0, uv1, uv2) = (mesh.uv(0), mesh.uv(1), mesh.uv(2));
    assert!((uv1 - uv0).dot(&(uv2 - uv0)).abs() < EPS);
    assert!(((uv1 - uv0).norm() - 1.0).abs() < EPS);
    assert!(((uv2 - uv0).norm() - 1.0).abs() < EPS);
}

#[test]
fn build_is_deterministic() {
    for [a, b, c] in sample_triangles() {
        let first = build_triangle(&a, &b, &c).unwrap();
        let second = build_triangle(&a, &b, &c).unwrap();
        let bits = |v: &[f32]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first.positions), bits(&second.positions));
        assert_eq!(bits(&first.normals), bits(&second.normals));
        assert_eq!(bits(&first.uvs), bits(&second.uvs));
    }
}

// ─── Degenerate input ─────────────────────────────────────────

#[test]
fn collinear_vertices_fail() {
    let config = TriangleConfig::new(
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.5, 0.0, 0.0),
        Point3::new(3.0, 0.0, 0.0),
    );
    assert!(matches!(config.validate(), Err(GeometryError::Degenerate { .. })));
    assert!(matches!(config.build(), Err(GeometryError::Degenerate { .. })));
}

#[test]
fn degenerate_error_names_vertices() {
    let p = Point3::new(1.0, 1.0, 1.0);
    let err = build_triangle(&p, &p, &p).unwrap_err();
    assert!(err.to_string().contains("degenerate"));
}

// ─── Alignment and declarative input ──────────────────────────

#[test]
fn alignment_flattens_triangle() {
    let [a, b, c] = sample_triangles()[3];
    let n = face_normal(&a, &b, &c).unwrap();
    let z = [a, b, c].map(|p| align_normal_to_axis(&p.coords, &n, &Vector3::z_axis()).z);
    assert!((z[0] - z[1]).abs() < 1e-4);
    assert!((z[1] - z[2]).abs() < 1e-4);
}

#[test]
fn registry_builds_from_property_string() {
    let registry = GeometryRegistry::with_builtins();
    let mesh = registry
        .build_str("primitive: triangle; vertexA: 1 0 0; vertexB: 0 1 0; vertexC: 0 0 1")
        .unwrap();
    let expected = TriangleConfig::new(
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    )
    .build()
    .unwrap();
    assert_eq!(mesh, expected);

    let sizes: Vec<usize> = mesh.attributes().iter().map(|a| a.item_size).collect();
    assert_eq!(sizes, vec![3, 3, 2]);
    assert_eq!(mesh.attribute(AttributeName::Uv).array.len(), 6);
}
