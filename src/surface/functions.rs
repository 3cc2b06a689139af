//! Analytic height functions sampled by the grid.
//!
//! Every function returns a finite value; results that come out as NaN or
//! infinity are replaced with `0.0` by [`finite_or_zero`].

/// Semi-axis of the saddle along y.
const SADDLE_A: f64 = 25.0;
/// Semi-axis of the saddle along x.
const SADDLE_B: f64 = 17.0;

/// `sin(r) / r` where `r` is the distance from the origin.
///
/// At the origin the quotient is `0 / 0`, which is coerced to `0.0`.
pub fn ripple(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    finite_or_zero(r.sin() / r)
}

/// `0.2 * (cos(x) + cos(y))`
pub fn eggbox(x: f64, y: f64) -> f64 {
    0.2 * (x.cos() + y.cos())
}

/// Hyperbolic paraboloid `y²/a² - x²/b²` with a = 25, b = 17.
pub fn saddle(x: f64, y: f64) -> f64 {
    (y * y) / (SADDLE_A * SADDLE_A) - (x * x) / (SADDLE_B * SADDLE_B)
}

/// Flat plane used for unrecognized selectors.
pub fn flat(_x: f64, _y: f64) -> f64 {
    0.0
}

/// Replace NaN and infinities with zero.
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
