//! Isometric SVG renders of analytic surfaces.
//!
//! - [`surface`] - Height functions, grid sampling and cell colors
//! - [`renderer`] - Projection and SVG output
//! - [`server`] - HTTP routes serving the rendered documents

pub mod config;
pub mod renderer;
pub mod server;
pub mod surface;

pub use config::SurfaceConfig;
pub use renderer::{RenderError, Renderer};
pub use surface::Surface;
