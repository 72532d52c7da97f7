//! Products command implementation.

use crate::error::Result;
use crate::output::Printer;
use crate::types::Product;

pub fn run(printer: &Printer) -> Result<()> {
    for product in Product::ALL {
        let f = product.formulation();
        printer.info(
            product.id(),
            &format!(
                "{}:{} base:liquid, wet {:.3} g/ml, dry {:.3} g/ml, max {}% {} pigment {}",
                f.ratio_base,
                f.ratio_liquid,
                f.wet_density,
                f.dry_density,
                f.pigment.max_percentage(),
                f.pigment.name(),
                printer.dim(product.description()),
            ),
        );
    }
    Ok(())
}
