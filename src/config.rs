//! Fixed canvas and grid parameters.

/// Canvas and sampling grid parameters for one render.
///
/// The served program always uses [`SurfaceConfig::default`]; smaller grids
/// are only built by library callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Number of grid cells along each axis
    pub cells: usize,
    /// Half-range of the sampling domain (-xy_range..+xy_range)
    pub xy_range: f64,
    /// Angle of the x and y axes (radians)
    pub angle: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 320,
            cells: 100,
            xy_range: 30.0,
            angle: std::f64::consts::FRAC_PI_6, // 30 degrees
        }
    }
}

impl SurfaceConfig {
    /// Pixels per x or y unit.
    pub fn xy_scale(&self) -> f64 {
        self.width as f64 / 2.0 / self.xy_range
    }

    /// Pixels per z unit.
    pub fn z_scale(&self) -> f64 {
        self.height as f64 * 0.4
    }

    /// Number of quadrilaterals in a full render.
    pub fn cell_count(&self) -> usize {
        self.cells * self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = SurfaceConfig::default();
        assert_eq!(config.width, 600);
        assert_eq!(config.height, 320);
        assert_eq!(config.cells, 100);
        assert_eq!(config.xy_range, 30.0);
        assert!((config.angle.to_degrees() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_derived_scales() {
        let config = SurfaceConfig::default();
        assert_eq!(config.xy_scale(), 10.0);
        assert_eq!(config.z_scale(), 128.0);
        assert_eq!(config.cell_count(), 10_000);
    }
}
