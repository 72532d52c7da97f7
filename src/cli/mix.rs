//! Mix command implementation.
//!
//! Computes base and liquid weights and remembers the inputs for next time.

use clap::Args;

use super::Session;
use crate::calc::MixResult;
use crate::error::{CastError, Result};
use crate::output::{grams, Printer};
use crate::types::Product;

/// Calculate base and liquid weights for a mold
#[derive(Args, Debug)]
pub struct MixArgs {
    /// Water weight the mold holds, in grams (default: last used)
    pub weight: Option<f64>,

    /// Waste margin in percent (default: last used, then 10)
    #[arg(long, short)]
    pub waste: Option<f64>,

    /// Product to mix (default: last used, then AC100)
    #[arg(long, short)]
    pub product: Option<Product>,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: MixArgs, session: &mut Session, printer: &Printer) -> Result<()> {
    let inputs = &mut session.state.inputs;

    if let Some(product) = args.product {
        inputs.product = product;
    }
    if let Some(waste) = args.waste {
        inputs.waste = waste;
    }
    if let Some(weight) = args.weight {
        inputs.weight = Some(weight);
    }

    let weight = inputs.weight.ok_or_else(|| CastError::Validation {
        message: "No water weight given".to_string(),
        help: Some(
            "Fill the mold with water, weigh it, and pass the grams: castmix mix 250".to_string(),
        ),
    })?;

    let product = inputs.product;
    let waste = inputs.waste;
    let result = product.formulation().mix(weight, waste);

    if weight < 0.0 || waste < 0.0 {
        printer.warning("Invalid", "weight and waste must not be negative");
    }

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| CastError::Parse {
            message: format!("Failed to encode result: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        print_result(&result, product, weight, waste, printer);
    }

    session.commit()
}

fn print_result(result: &MixResult, product: Product, weight: f64, waste: f64, printer: &Printer) {
    let formulation = product.formulation();
    printer.status(
        "Mixing",
        &format!(
            "{} for {} of water {}",
            product,
            grams(weight),
            printer.dim(&format!("(+{}% waste)", waste))
        ),
    );
    printer.info(
        "Base",
        &format!(
            "{} {}",
            printer.bold(&grams(result.base)),
            printer.dim(&format!("{} parts", formulation.ratio_base))
        ),
    );
    printer.info(
        "Liquid",
        &format!(
            "{} {}",
            printer.bold(&grams(result.liquid)),
            printer.dim(&format!("{} part", formulation.ratio_liquid))
        ),
    );
    printer.info("Total", &grams(result.total_wet));
    printer.info("Dry", &format!("~{}", grams(result.estimated_dry)));
}
