//! Product formulations: mix ratios and densities per casting compound.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CastError, Result};

/// Which kind of pigment a product accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PigmentKind {
    /// Liquid pigment dispersions, capped at a low total load.
    Liquid,
    /// Powder pigment, which tolerates a higher total load.
    Powder,
}

impl PigmentKind {
    /// Maximum total pigment percentage for this kind.
    pub fn max_percentage(self) -> f64 {
        match self {
            PigmentKind::Liquid => 2.0,
            PigmentKind::Powder => 5.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PigmentKind::Liquid => "liquid",
            PigmentKind::Powder => "powder",
        }
    }
}

/// Base:liquid ratio and densities for one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formulation {
    /// Parts of base powder.
    pub ratio_base: f64,
    /// Parts of liquid.
    pub ratio_liquid: f64,
    /// Wet mix density in g/ml.
    pub wet_density: f64,
    /// Cured density in g/ml.
    pub dry_density: f64,
    pub pigment: PigmentKind,
}

impl Formulation {
    /// Sum of base and liquid parts.
    pub fn total_parts(&self) -> f64 {
        self.ratio_base + self.ratio_liquid
    }
}

/// A supported casting product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Product {
    /// General purpose interior casting compound.
    #[default]
    Ac100,
    Ac200,
    /// Exterior grade.
    Ac300,
    /// Powder-pigmented terrazzo-style compound.
    Ac730,
}

impl Product {
    /// Every product, in display order.
    pub const ALL: [Product; 4] = [Product::Ac100, Product::Ac200, Product::Ac300, Product::Ac730];

    /// Product identifier, e.g. `AC100`.
    pub fn id(self) -> &'static str {
        match self {
            Product::Ac100 => "AC100",
            Product::Ac200 => "AC200",
            Product::Ac300 => "AC300",
            Product::Ac730 => "AC730",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Product::Ac100 => "Interior casting, liquid pigments",
            Product::Ac200 => "Interior casting, stronger gel coat",
            Product::Ac300 => "Exterior casting, liquid pigments",
            Product::Ac730 => "Terrazzo casting, powder pigments",
        }
    }

    /// Look up a product by identifier (case-insensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(id))
    }

    /// Look up a product by identifier, falling back to the default product
    /// for unknown ids.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }

    /// The formulation table entry for this product.
    pub fn formulation(self) -> Formulation {
        match self {
            Product::Ac100 => Formulation {
                ratio_base: 2.5,
                ratio_liquid: 1.0,
                wet_density: 1.845,
                dry_density: 1.745,
                pigment: PigmentKind::Liquid,
            },
            Product::Ac200 => Formulation {
                ratio_base: 2.0,
                ratio_liquid: 1.0,
                wet_density: 1.845,
                dry_density: 1.745,
                pigment: PigmentKind::Liquid,
            },
            Product::Ac300 => Formulation {
                ratio_base: 3.0,
                ratio_liquid: 1.0,
                wet_density: 1.845,
                dry_density: 1.745,
                pigment: PigmentKind::Liquid,
            },
            Product::Ac730 => Formulation {
                ratio_base: 5.0,
                ratio_liquid: 1.0,
                wet_density: 1.950,
                dry_density: 1.850,
                pigment: PigmentKind::Powder,
            },
        }
    }
}

impl FromStr for Product {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s).ok_or_else(|| CastError::Parse {
            message: format!("Unknown product: {}", s),
            help: Some(format!(
                "Available products: {}",
                Self::ALL.map(|p| p.id()).join(", ")
            )),
        })
    }
}

impl TryFrom<String> for Product {
    type Error = CastError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Product> for String {
    fn from(p: Product) -> Self {
        p.id().to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Product::from_id("AC730"), Some(Product::Ac730));
        assert_eq!(Product::from_id("ac200"), Some(Product::Ac200));
        assert_eq!(Product::from_id(" AC300 "), Some(Product::Ac300));
        assert_eq!(Product::from_id("AC999"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Product::resolve("AC999"), Product::Ac100);
        assert_eq!(Product::resolve(""), Product::Ac100);
        assert_eq!(Product::resolve("AC730"), Product::Ac730);
    }

    #[test]
    fn test_formulation_invariants() {
        for product in Product::ALL {
            let f = product.formulation();
            assert!(f.ratio_base > 0.0 && f.ratio_liquid > 0.0, "{}", product);
            assert!(f.total_parts() > 0.0);
            assert!(f.wet_density > 0.0 && f.dry_density > 0.0);
        }
    }

    #[test]
    fn test_only_ac730_takes_powder() {
        for product in Product::ALL {
            let expected = if product == Product::Ac730 {
                PigmentKind::Powder
            } else {
                PigmentKind::Liquid
            };
            assert_eq!(product.formulation().pigment, expected);
        }
    }

    #[test]
    fn test_parse_unknown_product() {
        let err = "XYZ".parse::<Product>().unwrap_err();
        assert!(err.to_string().contains("Unknown product"));
    }

    #[test]
    fn test_serde_as_id() {
        let json = serde_json::to_string(&Product::Ac730).unwrap();
        assert_eq!(json, "\"AC730\"");
        let product: Product = serde_json::from_str("\"AC200\"").unwrap();
        assert_eq!(product, Product::Ac200);
    }
}
