use clap::Parser;
use colored::Colorize;
use std::error::Error;
use subnet_calc::config::{OutputFormat, Settings};
use subnet_calc::output::render;
use subnet_calc::{calculate, logging};

/// IPv4 subnet calculator.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc", version)]
struct Cli {
    /// Address expression: `/24`, `255.255.255.0`, `192.168.1.10/24` or
    /// `192.168.1.10 255.255.255.0`.
    #[arg(required = true, num_args = 1..)]
    input: Vec<String>,

    /// Output format, overrides SUBNET_CALC_FORMAT.
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging to stderr.
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    let settings = Settings::from_env()?;
    logging::init(&settings.log_config, cli.debug)?;
    log::info!("#Start main()");

    let input = cli.input.join(" ");
    let format = cli.format.unwrap_or(settings.format);

    match calculate(&input) {
        Ok(result) => {
            println!("{}", render(&result, format)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            std::process::exit(1);
        }
    }
}
