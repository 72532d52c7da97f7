//! Pigment load limits, weights and percentage rebalancing.

use super::{round1, round2};
use crate::types::{PigmentEntry, Product, WeightedPigment};

/// Safety ceiling for total pigment load of a product, in percent.
///
/// Unknown ids get the default product's ceiling.
pub fn max_percentage(product_id: &str) -> f64 {
    Product::resolve(product_id)
        .formulation()
        .pigment
        .max_percentage()
}

/// Sum of pigment percentages, rounded to two decimals.
pub fn total_percentage(pigments: &[PigmentEntry]) -> f64 {
    round2(raw_total(pigments))
}

fn raw_total(pigments: &[PigmentEntry]) -> f64 {
    pigments.iter().map(|p| p.percentage).sum()
}

/// Pigment weights for a mix of `base_weight` + `liquid_weight` grams.
pub fn compute_weights(
    pigments: &[PigmentEntry],
    base_weight: f64,
    liquid_weight: f64,
) -> Vec<WeightedPigment> {
    let total = base_weight + liquid_weight;

    pigments
        .iter()
        .map(|p| WeightedPigment {
            entry: p.clone(),
            weight: round1(total * p.percentage / 100.0),
        })
        .collect()
}

/// Set the pigment at `changed` to `new_percentage`, then pull the others
/// down so the total stays within `max_total`.
///
/// The excess is taken from the other pigments in proportion to their
/// current percentages; each result is floored at zero and rounded to two
/// decimals. Flooring can leave the total under the cap, and that is kept.
/// If every other pigment is already zero the changed pigment is clamped to
/// `max_total` instead. `new_percentage` is expected to be clamped to
/// `0..=max_total` by the caller.
pub fn rebalance(
    pigments: &[PigmentEntry],
    changed: usize,
    new_percentage: f64,
    max_total: f64,
) -> Vec<PigmentEntry> {
    let mut result = pigments.to_vec();
    let Some(entry) = result.get_mut(changed) else {
        return result;
    };
    entry.percentage = new_percentage;

    let new_total = raw_total(&result);
    if new_total <= max_total {
        return result;
    }

    let excess = new_total - max_total;
    let others_sum: f64 = pigments
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != changed)
        .map(|(_, p)| p.percentage)
        .sum();

    if others_sum == 0.0 {
        tracing::debug!(changed, max_total, "no other pigment load, clamping to cap");
        result[changed].percentage = max_total;
        return result;
    }

    for (i, pigment) in result.iter_mut().enumerate() {
        if i == changed {
            continue;
        }
        let reduction = excess * (pigment.percentage / others_sum);
        pigment.percentage = round2((pigment.percentage - reduction).max(0.0));
    }

    result
}
