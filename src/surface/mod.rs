//! Surface selection and grid sampling.
//!
//! This module provides:
//! - [`Surface`] - Which height function a render samples
//! - [`GridSampler`] - Corner enumeration and elevation sampling
//! - [`stroke_color`] - Per-cell stroke color from local vs. global extrema

pub mod colors;
pub mod functions;
pub mod grid;

pub use colors::stroke_color;
pub use grid::{Extrema, GridSampler};

/// A domain point `(x, y)` with its finite elevation in `z`.
pub type ElevationSample = glam::DVec3;

/// Height function selected for a render.
///
/// Resolved once per request and passed by value through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    /// Damped radial ripple, `sin(r) / r`
    #[default]
    Ripple,
    /// Egg crate, `0.2 * (cos(x) + cos(y))`
    Eggbox,
    /// Hyperbolic paraboloid
    Saddle,
    /// Flat plane at z = 0, used for any unrecognized name
    Flat,
}

impl Surface {
    /// Resolve a selector name.
    ///
    /// Unrecognized names are not an error: they select [`Surface::Flat`].
    ///
    /// # Example
    ///
    /// ```
    /// use isosurf::surface::Surface;
    ///
    /// assert_eq!(Surface::from_name("saddle"), Surface::Saddle);
    /// assert_eq!(Surface::from_name("teapot"), Surface::Flat);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "ripple" | "f" => Surface::Ripple,
            "eggbox" => Surface::Eggbox,
            "saddle" => Surface::Saddle,
            other => {
                log::debug!("unknown surface '{}', rendering flat plane", other);
                Surface::Flat
            }
        }
    }

    /// Canonical selector name.
    pub fn name(self) -> &'static str {
        match self {
            Surface::Ripple => "ripple",
            Surface::Eggbox => "eggbox",
            Surface::Saddle => "saddle",
            Surface::Flat => "flat",
        }
    }

    /// Height at domain point `(x, y)`. Always finite.
    pub fn elevation(self, x: f64, y: f64) -> f64 {
        let z = match self {
            Surface::Ripple => functions::ripple(x, y),
            Surface::Eggbox => functions::eggbox(x, y),
            Surface::Saddle => functions::saddle(x, y),
            Surface::Flat => functions::flat(x, y),
        };
        functions::finite_or_zero(z)
    }
}
