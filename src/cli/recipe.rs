//! Recipe commands: save, list, show, delete and swatch export.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Subcommand};

use super::blend::{apply_pigment_args, print_pigments, PigmentArg};
use super::Session;
use crate::builder::RecipeBuilder;
use crate::calc::compute_weights;
use crate::error::{CastError, Result};
use crate::output::{display_path, grams, plural, Printer};
use crate::render::write_swatch;
use crate::types::{Colour, Product};

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// Save a new recipe
    Save(SaveArgs),

    /// List saved recipes
    List,

    /// Show a saved recipe
    Show(ShowArgs),

    /// Delete a saved recipe
    Delete(DeleteArgs),

    /// Write a PNG swatch of a saved recipe's mixed colour
    Swatch(SwatchArgs),
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Recipe name
    pub name: String,

    /// Pigments as <library-id|#RRGGBB>[:percent]
    #[arg(required = true)]
    pub pigments: Vec<PigmentArg>,

    /// Product the recipe is for (default: last used)
    #[arg(long, short)]
    pub product: Option<Product>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Recipe id or name
    pub recipe: String,

    /// Also show pigment weights for this water weight in grams
    #[arg(long)]
    pub weight: Option<f64>,

    /// Print the recipe as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Recipe id or name
    pub recipe: String,
}

#[derive(Args, Debug)]
pub struct SwatchArgs {
    /// Recipe id or name
    pub recipe: String,

    /// Output PNG file
    #[arg(long, short)]
    pub output: PathBuf,

    /// Swatch edge length in pixels
    #[arg(long, default_value = "128")]
    pub size: u32,
}

pub fn run(command: RecipeCommand, session: &mut Session, printer: &Printer) -> Result<()> {
    match command {
        RecipeCommand::Save(args) => save(args, session, printer),
        RecipeCommand::List => list(session, printer),
        RecipeCommand::Show(args) => show(args, session, printer),
        RecipeCommand::Delete(args) => delete(args, session, printer),
        RecipeCommand::Swatch(args) => swatch(args, session, printer),
    }
}

fn save(args: SaveArgs, session: &mut Session, printer: &Printer) -> Result<()> {
    let product = args.product.unwrap_or(session.state.inputs.product);
    let mut builder = RecipeBuilder::new(product);
    apply_pigment_args(&mut builder, &args.pigments);
    builder.name = args.name;
    builder.notes = args.notes.unwrap_or_default();

    print_pigments(&builder, printer);
    let recipe = builder.save(Utc::now())?;

    printer.status("Saved", &format!("{} ({})", recipe.name, recipe.product));
    println!("{}", recipe.id);

    session.state.add_recipe(recipe);
    session.commit()
}

fn list(session: &Session, printer: &Printer) -> Result<()> {
    let recipes = session.state.recipes();
    if recipes.is_empty() {
        printer.info("Recipes", "none saved");
        return Ok(());
    }

    for recipe in recipes {
        printer.info(
            recipe.product.id(),
            &format!(
                "{} {} {}",
                printer.swatch(Colour::decode(&recipe.mixed_color)),
                recipe.name,
                printer.dim(&recipe.id.to_string())
            ),
        );
    }
    printer.status("Listed", &plural(recipes.len(), "recipe", "recipes"));
    Ok(())
}

fn show(args: ShowArgs, session: &Session, printer: &Printer) -> Result<()> {
    let recipe = session.state.find_recipe(&args.recipe)?;

    if args.json {
        let json = serde_json::to_string_pretty(recipe).map_err(|e| CastError::Parse {
            message: format!("Failed to encode recipe: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    printer.status("Recipe", &format!("{} ({})", recipe.name, recipe.product));
    for pigment in &recipe.pigments {
        printer.info(
            &pigment.name,
            &format!("{:.2}% {}", pigment.percentage, printer.swatch(pigment.colour())),
        );
    }
    printer.info("Mixed", &printer.swatch(Colour::decode(&recipe.mixed_color)));
    if let Some(notes) = &recipe.notes {
        printer.info("Notes", notes);
    }
    printer.info(
        "Created",
        &recipe.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );

    if let Some(weight) = args.weight {
        let mix = recipe
            .product
            .formulation()
            .mix(weight, session.state.inputs.waste);
        printer.status(
            "Weighing",
            &format!("pigments for {} of mix", grams(mix.base + mix.liquid)),
        );
        for weighted in compute_weights(&recipe.pigments, mix.base, mix.liquid) {
            printer.info(&weighted.entry.name, &grams(weighted.weight));
        }
    }

    Ok(())
}

fn delete(args: DeleteArgs, session: &mut Session, printer: &Printer) -> Result<()> {
    let removed = session.state.delete_recipe(&args.recipe)?;
    printer.status("Deleted", &removed.name);
    session.commit()
}

fn swatch(args: SwatchArgs, session: &Session, printer: &Printer) -> Result<()> {
    let recipe = session.state.find_recipe(&args.recipe)?;
    let mixed = Colour::decode(&recipe.mixed_color);

    write_swatch(mixed, &recipe.pigments, &args.output, args.size)?;
    printer.status(
        "Wrote",
        &format!(
            "{} {}",
            display_path(&args.output),
            printer.dim(&format!("{}x{}", args.size, args.size))
        ),
    );
    Ok(())
}
