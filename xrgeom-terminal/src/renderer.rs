//! ASCII preview of a triangle's UV layout

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use xrgeom_core::MeshBuffers;

const EMPTY: char = '.';
const FILL: char = '#';
const VERTEX_LABELS: [char; 3] = ['A', 'B', 'C'];

/// Character grid covering the unit UV square, v = 1 on the top row
pub struct UvPreview {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl UvPreview {
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(2);
        let height = height.max(2);
        Self {
            width,
            height,
            char_buffer: vec![EMPTY; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(EMPTY);
    }

    /// Rasterize the first triangle of `mesh` in UV space and mark its corners
    pub fn render(&mut self, mesh: &MeshBuffers) {
        if mesh.vertex_count() < 3 {
            return;
        }

        let coords: Vec<(f32, f32)> = (0..3)
            .map(|i| {
                let uv = mesh.uv(i);
                self.to_grid(uv.x, uv.y)
            })
            .collect();
        self.rasterize_triangle(&coords);

        for (label, &(x, y)) in VERTEX_LABELS.iter().zip(&coords) {
            let col = (x.floor() as usize).min(self.width - 1);
            let row = (y.floor() as usize).min(self.height - 1);
            self.char_buffer[row * self.width + col] = *label;
        }
    }

    /// Cell-space position of a uv coordinate
    fn to_grid(&self, u: f32, v: f32) -> (f32, f32) {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        (u * self.width as f32, (1.0 - v) * self.height as f32)
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32)]) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        for y in 0..self.height {
            for x in 0..self.width {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, p) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        self.char_buffer[y * self.width + x] = FILL;
                    }
                }
            }
        }
    }

    pub fn row(&self, y: usize) -> String {
        self.char_buffer[y * self.width..(y + 1) * self.width].iter().collect()
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];
                let color = match c {
                    EMPTY => Color::DarkGrey,
                    FILL => Color::Cyan,
                    _ => Color::Yellow,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Barycentric weights of cell centre `p` against the triangle's grid-space
/// uv corners; `None` when the corners are collinear on the grid
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrgeom_core::{Geometry, TriangleConfig};

    #[test]
    fn test_barycentric_centroid() {
        let (w0, w1, w2) = barycentric((0.0, 0.0), (3.0, 0.0), (0.0, 3.0), (1.0, 1.0)).unwrap();
        assert!((w0 - 1.0 / 3.0).abs() < 1e-6);
        assert!((w1 - 1.0 / 3.0).abs() < 1e-6);
        assert!((w2 - 1.0 / 3.0).abs() < 1e-6);
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.5, 0.5)).is_none());
    }

    #[test]
    fn test_default_triangle_preview() {
        let mesh = TriangleConfig::default().build().unwrap();
        let mut preview = UvPreview::new(9, 4);
        preview.render(&mesh);

        // Apex A at (0.5, 1) sits on the top row, B and C in the bottom corners.
        assert!(preview.row(0).contains('A'));
        let bottom = preview.row(3);
        assert!(bottom.starts_with('B'));
        assert!(bottom.ends_with('C'));
        assert!(bottom.contains(FILL));
    }

    #[test]
    fn test_draw_writes_every_row() {
        let mut preview = UvPreview::new(4, 3);
        preview.clear();
        let mut out: Vec<u8> = Vec::new();
        preview.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches('\n').count(), 3);
    }
}
