use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::api::{ApiClient, ProbeError};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(&cli.api_root, cli.timeout_ms)?;
    match &cli.command {
        Commands::Run { .. } | Commands::List => commands::handle_run_commands(cli, &client),
        Commands::Query { .. } | Commands::Check { .. } => {
            commands::handle_probe_commands(cli, &client)
        }
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ProbeError>() {
        Some(e) => e.code(),
        None => "INTERNAL",
    }
}

fn report_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = serde_json::json!({
            "ok": false,
            "error": { "code": error_code(err), "message": err.to_string() }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
        );
    } else {
        eprintln!("error: {:#}", err);
    }
}
