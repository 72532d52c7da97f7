//! Pure calculation core.
//!
//! Nothing in here performs I/O or keeps state between calls: every
//! function takes its whole input and returns a fresh result. Invalid input
//! produces a defined fallback output rather than an error.

mod blend;
mod mix;
mod pigment;

pub use blend::mix_colour;
pub use mix::{compute_mix, MixResult};
pub use pigment::{compute_weights, max_percentage, rebalance, total_percentage};

/// Round to one decimal place, halves rounding up.
pub fn round1(value: f64) -> f64 {
    round_to(value, 10.0)
}

/// Round to two decimal places, halves rounding up.
pub fn round2(value: f64) -> f64 {
    round_to(value, 100.0)
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale + 0.5).floor() / scale
}
