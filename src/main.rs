use castmix::cli::{self, Cli, Commands, Session};
use castmix::output::Printer;
use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let Cli {
        store,
        config,
        verbose,
        command,
    } = Cli::parse();
    init_tracing(verbose);

    let printer = Printer::new();

    match command {
        Commands::Products => cli::products::run(&printer)?,
        Commands::Pigments => cli::pigments::run(&printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
        command => {
            let mut session = Session::open(store, config)?;
            match command {
                Commands::Mix(args) => cli::mix::run(args, &mut session, &printer)?,
                Commands::Blend(args) => cli::blend::run(args, &session, &printer)?,
                Commands::Recipe(command) => cli::recipe::run(command, &mut session, &printer)?,
                Commands::Products | Commands::Pigments | Commands::Completions(_) => {}
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("castmix=debug"),
        _ => EnvFilter::new("castmix=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
