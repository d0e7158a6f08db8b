use clap::Parser;
use miette::Result;
use ppmedit::cli::{edit, Cli};
use ppmedit::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    edit::run(cli.edit, &Printer::new())?;

    Ok(())
}
