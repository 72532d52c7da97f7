//! Approximate mixed colour of a pigment recipe.
//!
//! This is a plain weighted RGB average followed by a linear blend against a
//! white base. It is not a colour-science model and is only meant as a rough
//! preview; saved recipes store its exact output.

use super::total_percentage;
use crate::types::{Colour, PigmentEntry};

/// Mixed colour of `pigments` in a white base whose pigment cap is
/// `max_total` percent.
///
/// Pigment colours are averaged weighted by their share of the total load,
/// then laid over white with opacity `total / max_total` (saturating at 1).
/// No pigment load gives pure white.
pub fn mix_colour(pigments: &[PigmentEntry], max_total: f64) -> Colour {
    let total = total_percentage(pigments);
    if pigments.is_empty() || total == 0.0 {
        return Colour::WHITE;
    }

    let (mut r, mut g, mut b) = (0.0, 0.0, 0.0);
    // Entries without a colour still count towards the load
    for pigment in pigments
        .iter()
        .filter(|p| !p.color.is_empty() && p.percentage > 0.0)
    {
        let weight = pigment.percentage / total;
        let colour = pigment.colour();
        r += f64::from(colour.r) * weight;
        g += f64::from(colour.g) * weight;
        b += f64::from(colour.b) * weight;
    }

    let opacity = (total / max_total).min(1.0);
    let base = Colour::WHITE;
    let over = |base: u8, pigment: f64| f64::from(base) * (1.0 - opacity) + pigment * opacity;

    Colour::from_channels(over(base.r, r), over(base.g, g), over(base.b, b))
}
