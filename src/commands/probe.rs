use crate::cli::{Cli, Commands};
use crate::domain::models::{CheckReport, QueryReport, SearchQuery};
use crate::services::api::ApiClient;
use crate::services::output::print_one;
use crate::services::verifier;

pub fn handle_probe_commands(cli: &Cli, client: &ApiClient) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Query { text } => {
            let query = SearchQuery::new(text.clone());
            let envelope = client.search(&query)?;
            let rewrite = verifier::query_rewrite(&envelope)?;
            let report = QueryReport {
                text: text.clone(),
                found: envelope.found,
                items_on_page: envelope.items.len(),
                rewrite,
            };
            print_one(cli.json, &report, |r| {
                let mut row = format!(
                    "{}\t{} found",
                    r.text,
                    r.found.unwrap_or(r.items_on_page as u64)
                );
                if let Some(rw) = &r.rewrite {
                    row.push_str(&format!("\trewritten to: {}", rw.executed));
                }
                row
            })?;
        }
        Commands::Check { text } => {
            let query = SearchQuery::new(text.clone());
            let envelope = client.search(&query)?;
            let rewrite = verifier::query_rewrite(&envelope)?;
            let satisfied = if envelope.items.is_empty() {
                false
            } else {
                verifier::satisfies_query(client, &envelope, &query)?
            };
            let passed = !envelope.items.is_empty() && rewrite.is_none() && satisfied;
            let report = CheckReport {
                text: text.clone(),
                items_checked: envelope.items.len(),
                rewrite,
                satisfied,
                passed,
            };
            print_one(cli.json, &report, |r| {
                format!(
                    "{}\t{}\t{} items",
                    r.text,
                    if r.passed { "passed" } else { "failed" },
                    r.items_checked
                )
            })?;
        }
        Commands::Run { .. } | Commands::List => {
            unreachable!("handled by run commands")
        }
    }

    Ok(())
}
