//! Escape-time iteration.

use crate::pixel::Complex;

/// Squared-modulus bound past which an orbit counts as diverged.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/**
Number of iterations of `z -> z^2 + c`, starting from `z = 0`, before the
orbit escapes; `max_iterations` if it never does.

The escape test after each step is `2 * re + im^2 > 4` rather than
`re^2 + im^2 > 4`. The rendered boundary depends on it, so it must stay as is.
Only the starting test uses the true squared modulus of `c`.
*/
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let (cx, cy) = (c.real, c.imaginary);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut modulus = cx * cx + cy * cy;
    let mut iteration = 0;

    while modulus <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        let real = x * x - y * y + cx;
        let imaginary = 2.0 * x * y + cy;
        modulus = real + real + imaginary * imaginary;
        iteration += 1;
        x = real;
        y = imaginary;
    }

    iteration
}
