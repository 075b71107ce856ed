use clap::Parser;
use miette::Result;
use tint::cli::{Cli, Commands};
use tint::output::Printer;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "tint=debug",
            _ => "tint=trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Validate(args) => tint::cli::validate::run(args, &printer)?,
        Commands::Scan(args) => tint::cli::scan::run(args, &printer)?,
        Commands::Palette(args) => tint::cli::palette::run(args, &printer)?,
        Commands::Fmt(args) => tint::cli::fmt::run(args, &printer)?,
        Commands::Init(args) => tint::cli::init::run(args, &printer)?,
        Commands::Completions(args) => tint::cli::completions::run(args)?,
    }

    Ok(())
}
