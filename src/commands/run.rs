use crate::cli::{Cli, Commands};
use crate::services::api::ApiClient;
use crate::services::output::{print_json, print_out};
use crate::services::runner::run_scenarios;
use crate::services::scenarios::catalog;

pub fn handle_run_commands(cli: &Cli, client: &ApiClient) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run { filter } => {
            let summary = run_scenarios(client, filter.as_deref());
            if cli.json {
                print_json(&summary)?;
            } else {
                for r in &summary.scenarios {
                    println!("{}\t{}\t{}", r.name, r.status, r.description);
                    if let Some(rw) = &r.rewrite {
                        println!("\trewritten: {} -> {}", rw.sent, rw.executed);
                    }
                    if let Some(e) = &r.error {
                        println!("\terror: {}", e);
                    }
                }
                println!(
                    "total {}\tpassed {}\tfailed {}\terrors {}",
                    summary.total, summary.passed, summary.failed, summary.errors
                );
            }
        }
        Commands::List => {
            let items = catalog();
            print_out(cli.json, &items, |s| {
                format!("{}\t{}\t{}", s.name, s.expectation, s.query)
            })?;
        }
        Commands::Query { .. } | Commands::Check { .. } => {
            unreachable!("handled by probe commands")
        }
    }

    Ok(())
}
