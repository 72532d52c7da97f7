//! Mix-ratio calculator.

use serde::{Deserialize, Serialize};

use super::round1;
use crate::types::{Formulation, Product};

/// Weights in grams for one (volume, waste, product) combination.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixResult {
    pub liquid: f64,
    pub base: f64,
    pub total_wet: f64,
    pub estimated_dry: f64,
}

impl MixResult {
    /// The all-zero result returned for invalid input.
    pub const ZERO: Self = Self {
        liquid: 0.0,
        base: 0.0,
        total_wet: 0.0,
        estimated_dry: 0.0,
    };
}

impl Formulation {
    /// Compute the mix for a mold holding `volume` grams of water with a
    /// `waste_percent` safety overage.
    ///
    /// Negative volume or waste yields [`MixResult::ZERO`].
    pub fn mix(&self, volume: f64, waste_percent: f64) -> MixResult {
        if volume < 0.0 || waste_percent < 0.0 {
            return MixResult::ZERO;
        }

        let waste_multiplier = 1.0 + waste_percent / 100.0;
        let total_wet = volume * self.wet_density * waste_multiplier;
        let total_parts = self.total_parts();

        let liquid = total_wet * (self.ratio_liquid / total_parts);
        let base = total_wet * (self.ratio_base / total_parts);
        let estimated_dry = volume * self.dry_density * waste_multiplier;

        MixResult {
            liquid: round1(liquid),
            base: round1(base),
            total_wet: round1(total_wet),
            estimated_dry: round1(estimated_dry),
        }
    }
}

/// Compute the mix for a product id. Unknown ids use the default product.
pub fn compute_mix(volume: f64, waste_percent: f64, product_id: &str) -> MixResult {
    Product::resolve(product_id)
        .formulation()
        .mix(volume, waste_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ac100_100g() {
        let result = compute_mix(100.0, 0.0, "AC100");
        assert_eq!(
            result,
            MixResult {
                liquid: 52.7,
                base: 131.8,
                total_wet: 184.5,
                estimated_dry: 174.5,
            }
        );
    }

    #[test]
    fn test_ac100_with_waste() {
        let result = compute_mix(100.0, 10.0, "AC100");
        assert_eq!(
            result,
            MixResult {
                liquid: 58.0,
                base: 145.0,
                total_wet: 203.0,
                estimated_dry: 192.0,
            }
        );
    }

    #[test]
    fn test_ac200_ratio() {
        let result = compute_mix(100.0, 0.0, "AC200");
        assert_eq!(result.liquid, 61.5);
        assert_eq!(result.base, 123.0);
        assert_eq!(result.total_wet, 184.5);
    }

    #[test]
    fn test_ac730_densities() {
        let result = compute_mix(100.0, 0.0, "AC730");
        assert_eq!(
            result,
            MixResult {
                liquid: 32.5,
                base: 162.5,
                total_wet: 195.0,
                estimated_dry: 185.0,
            }
        );
    }

    #[test]
    fn test_unknown_product_uses_default() {
        assert_eq!(
            compute_mix(250.0, 5.0, "nope"),
            compute_mix(250.0, 5.0, "AC100")
        );
    }

    #[test]
    fn test_zero_input() {
        assert_eq!(compute_mix(0.0, 0.0, "AC100"), MixResult::ZERO);
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(compute_mix(-100.0, 0.0, "AC100"), MixResult::ZERO);
        assert_eq!(compute_mix(100.0, -1.0, "AC730"), MixResult::ZERO);
    }

    #[test]
    fn test_json_snapshot() {
        insta::assert_json_snapshot!(compute_mix(100.0, 0.0, "AC100"), @r###"
        {
          "liquid": 52.7,
          "base": 131.8,
          "totalWet": 184.5,
          "estimatedDry": 174.5
        }
        "###);
    }
}
