// main.rs - CLI entry point

use anyhow::Context;
use env_logger::Env;
use goverter_cli::prelude::*;

/// Set to `toml` to print the configuration as TOML instead of JSON
const FORMAT_ENV: &str = "GOVERTER_CLI_FORMAT";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let command = match parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_main(command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_main(command: Command) -> anyhow::Result<()> {
    log::debug!("running {}", command.name());

    match command {
        Command::Help { usage } => println!("{}", usage),
        Command::Version => println!("{}", get_info()),
        Command::Generate { config } => {
            // The engine runs out of process and reads the configuration from stdout
            let rendered = match std::env::var(FORMAT_ENV).as_deref() {
                Ok("toml") => config.to_toml().context("failed to render configuration as TOML")?,
                _ => config.to_json().context("failed to render configuration as JSON")?,
            };
            log::info!(
                "handing {} pattern(s) to the generator",
                config.package_patterns.len()
            );
            println!("{}", rendered);
        }
    }
    Ok(())
}
