//! Named geometry builders, looked up by the `primitive` property

use log::debug;
use std::collections::BTreeMap;
use std::fmt;

use crate::attrs::{parse_properties, Properties};
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{Geometry, MeshBuffers};
use crate::triangle::TriangleConfig;

/// Primitive used when the properties do not name one
pub const DEFAULT_PRIMITIVE: &str = "triangle";

/// Builds mesh buffers from declarative properties
pub type GeometryBuilder = fn(&Properties) -> GeometryResult<MeshBuffers>;

/// Registry of geometry primitives
#[derive(Clone, Default)]
pub struct GeometryRegistry {
    builders: BTreeMap<String, GeometryBuilder>,
}

impl GeometryRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the `triangle` primitive
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.builders.insert("triangle".to_string(), build_triangle_primitive);
        registry
    }

    pub fn register(&mut self, name: &str, builder: GeometryBuilder) -> GeometryResult<()> {
        if self.builders.contains_key(name) {
            return Err(GeometryError::AlreadyRegistered(name.to_string()));
        }
        debug!("registered geometry primitive `{name}`");
        self.builders.insert(name.to_string(), builder);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Registered primitive names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.builders.keys().map(String::as_str).collect()
    }

    pub fn build(&self, props: &Properties) -> GeometryResult<MeshBuffers> {
        let name = props.primitive().unwrap_or(DEFAULT_PRIMITIVE);
        let builder = self
            .builders
            .get(name)
            .ok_or_else(|| GeometryError::UnknownPrimitive(name.to_string()))?;
        builder(props)
    }

    /// Parse a property string and build the primitive it names
    pub fn build_str(&self, input: &str) -> GeometryResult<MeshBuffers> {
        self.build(&parse_properties(input)?)
    }
}

impl fmt::Debug for GeometryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.builders.keys()).finish()
    }
}

fn build_triangle_primitive(props: &Properties) -> GeometryResult<MeshBuffers> {
    TriangleConfig::from_properties(props)?.build()
}
