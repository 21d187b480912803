use clap::Parser;
use pss_analyzer::{
    cli::{Cli, Commands},
    config, handlers,
};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> pss_analyzer::Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let config = config::load_config(cli.config.as_deref())?;
    log::debug!("effective config: {:?}", config);

    match cli.command {
        Commands::Analyze {
            path,
            profile,
            format,
            fail_on_issues,
        } => {
            let outcome = handlers::handle_analyze(path, profile, format, &config)?;
            print!("{}", outcome.rendered);
            if fail_on_issues && outcome.result.has_issues() {
                return Ok(1);
            }
            Ok(0)
        }
        Commands::Tool => {
            let raw_args = handlers::read_input(None)?;
            println!("{}", handlers::handle_tool(&raw_args)?);
            Ok(0)
        }
    }
}
