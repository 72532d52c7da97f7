//! Pigments command implementation.

use crate::error::Result;
use crate::output::Printer;
use crate::types::{PigmentCategory, PigmentLibrary};

pub fn run(printer: &Printer) -> Result<()> {
    for category in [PigmentCategory::Core, PigmentCategory::New] {
        for pigment in PigmentLibrary::in_category(category) {
            printer.info(
                &category.to_string(),
                &format!(
                    "{} {} {}",
                    printer.swatch(pigment.colour),
                    pigment.name,
                    printer.dim(pigment.id)
                ),
            );
        }
    }
    printer.warning("Note", "library colours are approximations");
    Ok(())
}
