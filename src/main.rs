use clap::Parser;
use furnish::cli::{Cli, Commands};
use furnish::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_quiet(cli.quiet);

    match cli.command {
        Commands::Generate(args) => furnish::cli::generate::run(args, &printer)?,
        Commands::Highlight(args) => furnish::cli::highlight::run(args, &printer)?,
        Commands::List(args) => furnish::cli::list::run(args, &printer)?,
        Commands::Init(args) => furnish::cli::init::run(args, &printer)?,
        Commands::Completions(args) => furnish::cli::completions::run(args)?,
    }

    Ok(())
}
