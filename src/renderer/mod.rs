//! SVG rendering of a sampled surface.
//!
//! This module provides the [`Renderer`] struct which handles:
//! - Global extrema computation for the selected surface
//! - Isometric projection of each cell's corners
//! - Streaming the SVG document to any [`Write`] sink

pub mod projection;

use std::io::{self, Write};

use thiserror::Error;

use crate::config::SurfaceConfig;
use crate::surface::{stroke_color, GridSampler, Surface};
pub use projection::Projection;

/// SVG media type served with every document.
pub const CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write SVG: {0}")]
    Io(#[from] io::Error),
}

/// Renders surfaces as SVG documents with a fixed camera.
///
/// Holds only immutable configuration; the surface is passed to each call.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    config: SurfaceConfig,
    projection: Projection,
}

impl Renderer {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            projection: Projection::new(&config),
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Write the full document for `surface` to `out`.
    ///
    /// Polygons are emitted in row-major cell order.
    pub fn render<W: Write>(&self, surface: Surface, out: &mut W) -> Result<(), RenderError> {
        let sampler = GridSampler::new(self.config, surface);
        let global = sampler.surface_extrema();
        log::debug!(
            "rendering {} on {}x{} grid, z range [{}, {}]",
            surface.name(),
            self.config.cells,
            self.config.cells,
            global.min,
            global.max
        );

        write!(
            out,
            "<svg xmlns='http://www.w3.org/2000/svg' \
             style='stroke: grey; fill: white; stroke-width: 0.7' \
             width='{}' height='{}'>",
            self.config.width, self.config.height
        )?;

        for (i, j) in sampler.cells() {
            let corners = sampler.cell_corners(i, j);
            let color = stroke_color(GridSampler::cell_extrema(&corners), global);
            let [a, b, c, d] = corners.map(|p| self.projection.project(p));
            writeln!(
                out,
                "<polygon style='stroke: {};' points='{},{} {},{} {},{} {},{}'/>",
                color, a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
            )?;
        }

        writeln!(out, "</svg>")?;
        Ok(())
    }

    /// Render into an in-memory string.
    pub fn render_to_string(&self, surface: Surface) -> String {
        let mut buf = Vec::with_capacity(self.config.cell_count() * 128);
        if let Err(e) = self.render(surface, &mut buf) {
            log::error!("in-memory render of {} failed: {}", surface.name(), e);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}
