use glam::{DVec2, DVec3};

use crate::config::SurfaceConfig;

/// Fixed isometric projection onto the SVG canvas.
///
/// No clipping: points outside the domain land outside the canvas.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Canvas center in pixels
    pub origin: DVec2,
    /// `(cos θ, sin θ)` of the axis angle
    pub axis: DVec2,
    /// Pixels per x or y unit
    pub xy_scale: f64,
    /// Pixels per z unit
    pub z_scale: f64,
}

impl Projection {
    pub fn new(config: &SurfaceConfig) -> Self {
        let (sin, cos) = config.angle.sin_cos();
        Self {
            origin: DVec2::new(config.width as f64 / 2.0, config.height as f64 / 2.0),
            axis: DVec2::new(cos, sin),
            xy_scale: config.xy_scale(),
            z_scale: config.z_scale(),
        }
    }

    /// Project `(x, y, z)` to screen coordinates.
    pub fn project(&self, p: DVec3) -> DVec2 {
        let sx = self.origin.x + (p.x - p.y) * self.axis.x * self.xy_scale;
        let sy = self.origin.y + (p.x + p.y) * self.axis.y * self.xy_scale - p.z * self.z_scale;
        DVec2::new(sx, sy)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}
