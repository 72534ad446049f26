use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Fetch project dependencies managed as Git submodules", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let exit_code = commands::fetch::execute()?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
