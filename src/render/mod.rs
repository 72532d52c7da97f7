//! Image output.

mod swatch;

pub use swatch::{render_swatch, write_swatch};
