use clap::{Parser, Subcommand};

pub const DEFAULT_API_ROOT: &str = "https://api.hh.ru/vacancies";

#[derive(Parser, Debug)]
#[command(
    name = "vacprobe",
    version,
    about = "Query-integrity probe for the HeadHunter vacancy search API"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_API_ROOT,
        help = "Search endpoint root"
    )]
    pub api_root: String,
    #[arg(
        long,
        global = true,
        default_value_t = 10_000,
        help = "Per-request timeout in milliseconds"
    )]
    pub timeout_ms: u64,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in scenarios, optionally only those whose name
    /// contains FILTER
    Run {
        #[arg(allow_hyphen_values = true)]
        filter: Option<String>,
    },
    /// List the built-in scenarios
    List,
    /// Submit one ad-hoc query and report what came back
    Query { text: String },
    /// Full exact-match verification for one ad-hoc query
    Check { text: String },
}
