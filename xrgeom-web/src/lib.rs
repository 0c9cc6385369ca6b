//! xrgeom Web - WASM bindings for triangle geometry
//!
//! Exposes the triangle builder to the browser. Buffers are returned as
//! `Float32Array` copies ready for upload by the host renderer.

use nalgebra::Point3;
use wasm_bindgen::prelude::*;
use xrgeom_core::{
    build_triangle, AttributeName, GeometryError, GeometryRegistry, GeometryResult, MeshBuffers,
};

#[wasm_bindgen]
pub struct TriangleGeometry {
    mesh: MeshBuffers,
}

#[wasm_bindgen]
impl TriangleGeometry {
    /// Build from a property string such as `"vertexA: 0 1 0; vertexC: 1 0 0"`
    #[wasm_bindgen(constructor)]
    pub fn new(attrs: &str) -> Result<TriangleGeometry, JsValue> {
        let mesh = build_from_attrs(attrs).map_err(to_js_error)?;
        Ok(TriangleGeometry { mesh })
    }

    /// Build from three `[x, y, z]` arrays
    #[wasm_bindgen(js_name = fromVertices)]
    pub fn from_vertices(a: &[f32], b: &[f32], c: &[f32]) -> Result<TriangleGeometry, JsValue> {
        let mesh = build_from_vertices(a, b, c).map_err(to_js_error)?;
        Ok(TriangleGeometry { mesh })
    }

    pub fn positions(&self) -> Vec<f32> {
        self.mesh.positions.clone()
    }

    pub fn normals(&self) -> Vec<f32> {
        self.mesh.normals.clone()
    }

    pub fn uvs(&self) -> Vec<f32> {
        self.mesh.uvs.clone()
    }

    /// Components per vertex for `position`, `normal` or `uv`; 0 otherwise
    #[wasm_bindgen(js_name = itemSize)]
    pub fn item_size(name: &str) -> usize {
        AttributeName::from_name(name).map_or(0, AttributeName::item_size)
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }
}

fn build_from_attrs(attrs: &str) -> GeometryResult<MeshBuffers> {
    GeometryRegistry::with_builtins().build_str(attrs)
}

fn build_from_vertices(a: &[f32], b: &[f32], c: &[f32]) -> GeometryResult<MeshBuffers> {
    let a = to_point("vertexA", a)?;
    let b = to_point("vertexB", b)?;
    let c = to_point("vertexC", c)?;
    build_triangle(&a, &b, &c)
}

fn to_point(name: &str, v: &[f32]) -> GeometryResult<Point3<f32>> {
    match *v {
        [x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(GeometryError::Parse(format!(
            "{name}: expected 3 components, found {}",
            v.len()
        ))),
    }
}

fn to_js_error(err: GeometryError) -> JsValue {
    let message = JsValue::from_str(&err.to_string());
    web_sys::console::warn_1(&message);
    message
}
