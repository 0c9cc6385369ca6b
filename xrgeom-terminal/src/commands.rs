//! CLI command implementations.

use clap::{Args, ValueEnum};
use log::info;
use std::error::Error;
use std::fs;
use std::io::{stdout, Write};
use std::path::PathBuf;
use xrgeom_core::registry::DEFAULT_PRIMITIVE;
use xrgeom_core::triangle::VERTEX_PROPERTIES;
use xrgeom_core::{
    parse_properties, BufferAttribute, Geometry, GeometryError, GeometryRegistry, MeshBuffers,
    Properties, TriangleConfig,
};

use crate::renderer::UvPreview;

pub type CommandResult = Result<(), Box<dyn Error>>;

/// Where the triangle's vertices come from.
///
/// Later sources override earlier ones: defaults, `--config`, `--attrs`,
/// then the individual `--vertex-*` flags.
#[derive(Args, Debug, Default)]
pub struct VertexArgs {
    /// JSON file with `vertexA`, `vertexB`, `vertexC` objects ({"x", "y", "z"}).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Property string, e.g. "vertexA: 0 1 0; vertexB: -1 0 0".
    #[arg(long)]
    pub attrs: Option<String>,

    /// First vertex as "X Y Z".
    #[arg(long, value_name = "X Y Z", allow_hyphen_values = true)]
    pub vertex_a: Option<String>,

    /// Second vertex as "X Y Z".
    #[arg(long, value_name = "X Y Z", allow_hyphen_values = true)]
    pub vertex_b: Option<String>,

    /// Third vertex as "X Y Z".
    #[arg(long, value_name = "X Y Z", allow_hyphen_values = true)]
    pub vertex_c: Option<String>,
}

impl VertexArgs {
    pub fn resolve(&self) -> Result<TriangleConfig, Box<dyn Error>> {
        let mut config: TriangleConfig = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
                serde_json::from_str(&text)
                    .map_err(|e| format!("invalid config {}: {e}", path.display()))?
            }
            None => TriangleConfig::default(),
        };

        if let Some(attrs) = &self.attrs {
            let props = parse_properties(attrs)?;
            if let Some(name) = props.primitive() {
                if name != DEFAULT_PRIMITIVE {
                    return Err(GeometryError::UnknownPrimitive(name.to_string()).into());
                }
            }
            config.apply_properties(&props)?;
        }

        let mut overrides = Properties::new();
        let flags = [&self.vertex_a, &self.vertex_b, &self.vertex_c];
        for (name, flag) in VERTEX_PROPERTIES.into_iter().zip(flags) {
            if let Some(value) = flag {
                overrides.insert(name, value.as_str());
            }
        }
        config.apply_properties(&overrides)?;

        Ok(config)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Build the triangle and print its buffers.
pub fn build(args: &VertexArgs, format: OutputFormat) -> CommandResult {
    let config = args.resolve()?;
    let mesh = config.build()?;
    info!("built triangle with {} vertices", mesh.vertex_count());

    let mut out = stdout();
    match format {
        OutputFormat::Text => {
            for attr in mesh.attributes() {
                writeln!(out, "{}", format_attribute(&attr))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &mesh)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Draw the triangle's UV layout.
pub fn preview(args: &VertexArgs, width: usize, height: usize) -> CommandResult {
    let mesh: MeshBuffers = args.resolve()?.build()?;

    let mut preview = UvPreview::new(width, height);
    preview.render(&mesh);

    let mut out = stdout();
    preview.draw(&mut out)?;
    out.flush()?;
    Ok(())
}

/// List registered geometry primitives.
pub fn primitives() -> CommandResult {
    for name in GeometryRegistry::with_builtins().names() {
        println!("{name}");
    }
    Ok(())
}

/// One line per attribute: `name (itemSize): v0 | v1 | v2`
pub fn format_attribute(attr: &BufferAttribute<'_>) -> String {
    let items: Vec<String> = attr
        .array
        .chunks(attr.item_size)
        .map(|item| {
            item.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    format!("{} ({}): {}", attr.name, attr.item_size, items.join(" | "))
}
