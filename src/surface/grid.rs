use super::{ElevationSample, Surface};
use crate::config::SurfaceConfig;

/// Minimum and maximum elevation over a set of samples.
///
/// Used both for a single cell's four corners and for the whole grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    /// Fold heights into their extrema.
    ///
    /// Returns `None` when `heights` is empty.
    pub fn from_heights<I: IntoIterator<Item = f64>>(heights: I) -> Option<Self> {
        heights.into_iter().fold(None, |acc, z| match acc {
            None => Some(Self { min: z, max: z }),
            Some(e) => Some(Self {
                min: e.min.min(z),
                max: e.max.max(z),
            }),
        })
    }
}

/// Samples a surface on a `cells × cells` grid over the configured domain.
///
/// Corner indices run `0..=cells`; cell indices run `0..cells`.
#[derive(Debug, Clone, Copy)]
pub struct GridSampler {
    config: SurfaceConfig,
    surface: Surface,
}

impl GridSampler {
    pub fn new(config: SurfaceConfig, surface: Surface) -> Self {
        Self { config, surface }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Domain point and elevation at corner `(i, j)`.
    pub fn sample(&self, i: usize, j: usize) -> ElevationSample {
        let n = self.config.cells as f64;
        let x = self.config.xy_range * (i as f64 / n - 0.5);
        let y = self.config.xy_range * (j as f64 / n - 0.5);
        ElevationSample::new(x, y, self.surface.elevation(x, y))
    }

    /// The four corners of cell `(i, j)`, in polygon winding order:
    /// `(i+1, j)`, `(i, j)`, `(i, j+1)`, `(i+1, j+1)`.
    pub fn cell_corners(&self, i: usize, j: usize) -> [ElevationSample; 4] {
        [
            self.sample(i + 1, j),
            self.sample(i, j),
            self.sample(i, j + 1),
            self.sample(i + 1, j + 1),
        ]
    }

    /// Cell indices in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.config.cells;
        (0..n).flat_map(move |i| (0..n).map(move |j| (i, j)))
    }

    /// Extrema over the four corners of one cell.
    pub fn cell_extrema(corners: &[ElevationSample; 4]) -> Extrema {
        let z = corners.map(|c| c.z);
        Extrema {
            min: z[0].min(z[1]).min(z[2]).min(z[3]),
            max: z[0].max(z[1]).max(z[2]).max(z[3]),
        }
    }

    /// Extrema over every cell corner of the grid.
    ///
    /// A zero-cell grid has no corners and reports `0.0` for both bounds.
    pub fn surface_extrema(&self) -> Extrema {
        Extrema::from_heights(
            self.cells()
                .flat_map(|(i, j)| self.cell_corners(i, j))
                .map(|c| c.z),
        )
        .unwrap_or(Extrema { min: 0.0, max: 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(cells: usize) -> SurfaceConfig {
        SurfaceConfig {
            cells,
            ..SurfaceConfig::default()
        }
    }

    #[test]
    fn test_sample_domain_bounds() {
        let sampler = GridSampler::new(SurfaceConfig::default(), Surface::Flat);

        let first = sampler.sample(0, 0);
        assert_eq!(first.x, -15.0);
        assert_eq!(first.y, -15.0);

        let last = sampler.sample(100, 100);
        assert_eq!(last.x, 15.0);
        assert_eq!(last.y, 15.0);

        let mid = sampler.sample(50, 50);
        assert_eq!(mid.x, 0.0);
        assert_eq!(mid.y, 0.0);
    }

    #[test]
    fn test_ripple_center_corner_is_finite() {
        let sampler = GridSampler::new(SurfaceConfig::default(), Surface::Ripple);
        let center = sampler.sample(50, 50);
        assert_eq!(center.z, 0.0);
    }

    #[test]
    fn test_cell_corner_order() {
        let sampler = GridSampler::new(small_config(4), Surface::Saddle);
        let corners = sampler.cell_corners(1, 2);

        assert_eq!(corners[0], sampler.sample(2, 2));
        assert_eq!(corners[1], sampler.sample(1, 2));
        assert_eq!(corners[2], sampler.sample(1, 3));
        assert_eq!(corners[3], sampler.sample(2, 3));
    }

    #[test]
    fn test_cells_row_major() {
        let sampler = GridSampler::new(small_config(3), Surface::Flat);
        let cells: Vec<_> = sampler.cells().collect();

        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[1], (0, 1));
        assert_eq!(cells[3], (1, 0));
        assert_eq!(cells[8], (2, 2));
    }

    #[test]
    fn test_surface_extrema_bound_every_sample() {
        for surface in [Surface::Ripple, Surface::Eggbox, Surface::Saddle] {
            let sampler = GridSampler::new(SurfaceConfig::default(), surface);
            let extrema = sampler.surface_extrema();
            assert!(extrema.min <= extrema.max);

            let n = sampler.config().cells;
            for i in 0..=n {
                for j in 0..=n {
                    let z = sampler.sample(i, j).z;
                    assert!(
                        extrema.min <= z && z <= extrema.max,
                        "{:?}: sample ({i}, {j}) = {z} outside {:?}",
                        surface,
                        extrema
                    );
                }
            }
        }
    }

    #[test]
    fn test_flat_extrema_are_zero() {
        let sampler = GridSampler::new(small_config(5), Surface::Flat);
        assert_eq!(sampler.surface_extrema(), Extrema { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_cell_extrema() {
        let corners = [
            ElevationSample::new(0.0, 0.0, 0.5),
            ElevationSample::new(0.0, 0.0, -1.5),
            ElevationSample::new(0.0, 0.0, 2.0),
            ElevationSample::new(0.0, 0.0, 0.0),
        ];
        let extrema = GridSampler::cell_extrema(&corners);
        assert_eq!(extrema.min, -1.5);
        assert_eq!(extrema.max, 2.0);
    }

    #[test]
    fn test_extrema_from_empty() {
        assert!(Extrema::from_heights(std::iter::empty()).is_none());
    }
}
