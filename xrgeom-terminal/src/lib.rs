//! Terminal front-end for xrgeom: buffer dumps and UV previews

pub mod commands;
pub mod renderer;

pub use commands::{OutputFormat, VertexArgs};
pub use renderer::UvPreview;
