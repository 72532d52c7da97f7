//! Blend command implementation.
//!
//! Builds a working recipe from pigment arguments and prints the balanced
//! percentages, the mixed colour and, optionally, pigment weights.

use std::str::FromStr;

use clap::Args;

use super::Session;
use crate::builder::RecipeBuilder;
use crate::error::{CastError, Result};
use crate::output::{grams, percent, Printer};
use crate::types::{Colour, PigmentLibrary, Product, DEFAULT_PERCENTAGE};

/// One pigment on the command line: `<library-id|#RRGGBB>[:percent]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PigmentArg {
    pub source: PigmentSource,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PigmentSource {
    Library(&'static str),
    Custom(Colour),
}

impl FromStr for PigmentArg {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, pct) = match s.rsplit_once(':') {
            Some((name, pct)) => (name.trim(), Some(pct.trim())),
            None => (s, None),
        };

        let percentage = match pct {
            Some(pct) => {
                let pct = pct.strip_suffix('%').unwrap_or(pct);
                pct.parse::<f64>().map_err(|_| CastError::Parse {
                    message: format!("Invalid pigment percentage: {}", pct),
                    help: Some("Use a number like blue:0.8".to_string()),
                })?
            }
            None => DEFAULT_PERCENTAGE,
        };

        let source = if name.starts_with('#') {
            PigmentSource::Custom(Colour::from_hex(name)?)
        } else {
            let pigment = PigmentLibrary::get(name)
                .or_else(|| PigmentLibrary::get_by_name(name))
                .ok_or_else(|| CastError::Parse {
                    message: format!("Unknown pigment: {}", name),
                    help: Some(
                        "Run `castmix pigments` for library ids, or give a #RRGGBB colour"
                            .to_string(),
                    ),
                })?;
            PigmentSource::Library(pigment.id)
        };

        Ok(Self { source, percentage })
    }
}

/// Apply pigment arguments to a builder in order, one edit each, so later
/// pigments rebalance earlier ones exactly as interactive edits would.
pub fn apply_pigment_args(builder: &mut RecipeBuilder, pigments: &[PigmentArg]) {
    for pigment in pigments {
        let id = builder.add_pigment();
        match &pigment.source {
            PigmentSource::Library(pigment_id) => builder.select_library(id, pigment_id),
            PigmentSource::Custom(colour) => {
                builder.select_custom(id);
                builder.set_colour(id, &colour.to_string());
            }
        }
        builder.set_percentage(id, pigment.percentage);
    }
}

/// Preview a pigment blend without saving it
#[derive(Args, Debug)]
pub struct BlendArgs {
    /// Pigments as <library-id|#RRGGBB>[:percent], e.g. blue:0.8 "#FF0000:0.5"
    #[arg(required = true)]
    pub pigments: Vec<PigmentArg>,

    /// Product whose pigment cap applies (default: last used)
    #[arg(long, short)]
    pub product: Option<Product>,

    /// Also show pigment weights for this water weight in grams
    #[arg(long)]
    pub weight: Option<f64>,
}

pub fn run(args: BlendArgs, session: &Session, printer: &Printer) -> Result<()> {
    let product = args.product.unwrap_or(session.state.inputs.product);
    let mut builder = RecipeBuilder::new(product);
    apply_pigment_args(&mut builder, &args.pigments);

    print_pigments(&builder, printer);

    if let Some(weight) = args.weight {
        let mix = product.formulation().mix(weight, session.state.inputs.waste);
        printer.status(
            "Weighing",
            &format!("pigments for {} of {}", grams(mix.base + mix.liquid), product),
        );
        for weighted in builder.weights(&mix) {
            printer.info(&weighted.entry.name, &grams(weighted.weight));
        }
    }

    // Machine-readable result
    println!("{}", builder.mixed_colour());
    Ok(())
}

/// Print the builder's pigments, total load and mixed colour.
pub fn print_pigments(builder: &RecipeBuilder, printer: &Printer) {
    for pigment in builder.pigments() {
        printer.info(
            &pigment.name,
            &format!("{} {}", percent(pigment.percentage), printer.swatch(pigment.colour())),
        );
    }

    let total = builder.total_percentage();
    let max = builder.max_percentage();
    printer.info(
        "Total",
        &format!(
            "{} {}",
            percent(total),
            printer.dim(&format!("of {}% max for {}", max, builder.product()))
        ),
    );

    let mixed = builder.mixed_colour();
    printer.status(
        "Mixed",
        &format!(
            "{} {}",
            printer.swatch(mixed),
            printer.dim(&format!("text {}", mixed.contrast()))
        ),
    );
}
