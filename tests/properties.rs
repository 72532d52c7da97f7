//! Property-based tests for the calculation core.
//!
//! These tests verify that:
//! - Mix results add up for every product and any non-negative input
//! - Negative input always yields the zero result
//! - Rebalancing hits the cap exactly when nothing clips, and leaves
//!   balanced lists alone
//! - A lone pigment at the cap mixes to its own colour

use castmix::{
    compute_mix, max_percentage, mix_colour, rebalance, total_percentage, Colour, MixResult,
    PigmentEntry, Product,
};
use proptest::prelude::*;

/// Strategy for a product id, including unknown ones.
fn arb_product_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("AC100".to_string()),
        Just("AC200".to_string()),
        Just("AC300".to_string()),
        Just("AC730".to_string()),
        "[A-Z]{2}[0-9]{3}",
    ]
}

/// Strategy for a list of pigments with two-decimal percentages.
fn arb_pigments(max_len: usize) -> impl Strategy<Value = Vec<PigmentEntry>> {
    prop::collection::vec((1u32..=200, any::<[u8; 3]>()), 1..=max_len).prop_map(|items| {
        items
            .into_iter()
            .map(|(hundredths, [r, g, b])| {
                PigmentEntry::custom(Colour::rgb(r, g, b), f64::from(hundredths) / 100.0)
            })
            .collect()
    })
}

fn arb_cap() -> impl Strategy<Value = f64> {
    prop_oneof![Just(2.0), Just(5.0)]
}

proptest! {
    /// Base and liquid always add up to the wet total, within rounding.
    #[test]
    fn mix_parts_sum_to_total(
        volume in 0.0f64..20_000.0,
        waste in 0.0f64..100.0,
        product in arb_product_id(),
    ) {
        let result = compute_mix(volume, waste, &product);
        prop_assert!((result.base + result.liquid - result.total_wet).abs() <= 0.1 + 1e-9);
        prop_assert!(result.liquid >= 0.0 && result.base >= 0.0);
        prop_assert!(result.estimated_dry >= 0.0);
    }

    /// Negative volume or waste gives the zero result.
    #[test]
    fn negative_input_is_zero(
        x in 0.001f64..10_000.0,
        v in 0.0f64..10_000.0,
        product in arb_product_id(),
    ) {
        prop_assert_eq!(compute_mix(-x, v, &product), MixResult::ZERO);
        prop_assert_eq!(compute_mix(v, -x, &product), MixResult::ZERO);
    }

    /// Same inputs, same output.
    #[test]
    fn mix_is_deterministic(volume in 0.0f64..5_000.0, waste in 0.0f64..50.0) {
        prop_assert_eq!(compute_mix(volume, waste, "AC200"), compute_mix(volume, waste, "AC200"));
    }

    /// When the changed value is within the cap no other pigment clips at
    /// zero, so an over-cap edit lands exactly on the cap.
    #[test]
    fn rebalance_conserves_cap(
        pigments in arb_pigments(6),
        index in any::<prop::sample::Index>(),
        fraction in 0.0f64..=1.0,
        cap in arb_cap(),
    ) {
        let changed = index.index(pigments.len());
        let new_value = cap * fraction;
        let others: f64 = pigments
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != changed)
            .map(|(_, p)| p.percentage)
            .sum();
        prop_assume!(others > 0.0 && new_value + others > cap);

        let result = rebalance(&pigments, changed, new_value, cap);
        let total: f64 = result.iter().map(|p| p.percentage).sum();
        let tolerance = 0.005 * pigments.len() as f64 + 1e-9;

        prop_assert!((total - cap).abs() <= tolerance, "total {} cap {}", total, cap);
        prop_assert_eq!(result[changed].percentage, new_value);
        prop_assert!(result.iter().all(|p| p.percentage >= 0.0));
    }

    /// A list already within the cap is returned unchanged, and so is a
    /// second application of the same edit.
    #[test]
    fn rebalance_is_idempotent_when_balanced(
        pigments in arb_pigments(5),
        index in any::<prop::sample::Index>(),
        cap in arb_cap(),
    ) {
        let changed = index.index(pigments.len());
        let value = pigments[changed].percentage.min(cap);

        let once = rebalance(&pigments, changed, value, cap);
        let raw: f64 = once.iter().map(|p| p.percentage).sum();
        prop_assume!(raw <= cap);

        let twice = rebalance(&once, changed, value, cap);
        prop_assert_eq!(once, twice);
    }

    /// Identity and order of pigments survive rebalancing.
    #[test]
    fn rebalance_keeps_ids(pigments in arb_pigments(6), cap in arb_cap()) {
        let result = rebalance(&pigments, 0, cap, cap);
        let before: Vec<_> = pigments.iter().map(|p| p.id).collect();
        let after: Vec<_> = result.iter().map(|p| p.id).collect();
        prop_assert_eq!(before, after);
    }

    /// A lone pigment at the cap mixes to exactly its own colour.
    #[test]
    fn single_pigment_at_cap_is_own_colour(rgb in any::<[u8; 3]>(), cap in arb_cap()) {
        let colour = Colour::rgb(rgb[0], rgb[1], rgb[2]);
        let pigments = vec![PigmentEntry::custom(colour, cap)];
        prop_assert_eq!(mix_colour(&pigments, cap), colour);
    }

    /// All-zero loads are pure white whatever the colours.
    #[test]
    fn zero_load_is_white(rgbs in prop::collection::vec(any::<[u8; 3]>(), 0..5), cap in arb_cap()) {
        let pigments: Vec<_> = rgbs
            .into_iter()
            .map(|[r, g, b]| PigmentEntry::custom(Colour::rgb(r, g, b), 0.0))
            .collect();
        prop_assert_eq!(total_percentage(&pigments), 0.0);
        prop_assert_eq!(mix_colour(&pigments, cap), Colour::WHITE);
    }

    /// Only the powder-pigment product gets the higher cap.
    #[test]
    fn max_percentage_by_product(product in arb_product_id()) {
        let expected = if Product::from_id(&product) == Some(Product::Ac730) { 5.0 } else { 2.0 };
        prop_assert_eq!(max_percentage(&product), expected);
    }
}
