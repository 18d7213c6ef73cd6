//! Evaluate expressions and unit conversions from the command line.
//!
//! Exposes the same tools an agent orchestrator would register, so results
//! printed here are byte-for-byte what the LLM would see.
//!
//! # Examples
//!
//! ```sh
//! # Evaluate an arithmetic expression
//! numera --expr "sqrt(144) + 2 ** 3"
//!
//! # Run a unit conversion query
//! numera --convert "100 km a millas"
//!
//! # Dispatch through the tool layer with raw JSON arguments
//! numera --tool calculator --args '{"expression": "25 * 4"}'
//!
//! # Print the tool definitions sent to the model
//! numera --definitions
//! ```

use clap::Parser;
use numera_rs::prelude::*;
use std::process;
use tracing::debug;

/// Evaluate expressions and unit conversions from the command line.
///
/// Exactly one action flag is required: --expr, --convert, --tool, or
/// --definitions.
#[derive(Parser)]
#[command(name = "numera")]
struct Cli {
    // ── Actions ────────────────────────────────────────────────
    /// Arithmetic expression to evaluate
    #[arg(long)]
    expr: Option<String>,

    /// Unit conversion query, e.g. "100 km a millas"
    #[arg(long)]
    convert: Option<String>,

    /// Dispatch to a registered tool by name (with --args)
    #[arg(long)]
    tool: Option<String>,

    /// JSON arguments for --tool
    #[arg(long, default_value = "{}")]
    args: String,

    /// Print the tool definitions as JSON and exit
    #[arg(long)]
    definitions: bool,

    // ── Tool layer tuning ──────────────────────────────────────
    /// Per-call timeout in seconds for --tool dispatch
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    // ── Diagnostics ────────────────────────────────────────────
    /// Log tool dispatch and engine traces to stderr
    #[arg(long)]
    verbose: bool,
}

fn build_tool_set(timeout_secs: u64) -> ToolSet {
    ToolSet::new()
        .with_builtin_tools()
        .with_arg_validation(true)
        .with_default_timeout(Some(std::time::Duration::from_secs(timeout_secs)))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.definitions {
        let tools = build_tool_set(cli.timeout_secs);
        match serde_json::to_string_pretty(&tools.definitions()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize definitions: {e}");
                process::exit(1);
            }
        }
        return;
    }

    if let Some(expr) = &cli.expr {
        debug!("evaluating expression: {expr}");
        println!("{}", evaluate(expr));
        return;
    }

    if let Some(query) = &cli.convert {
        debug!("running conversion query: {query}");
        println!("{}", convert_query(query));
        return;
    }

    if let Some(name) = &cli.tool {
        let tools = build_tool_set(cli.timeout_secs);
        println!("{}", tools.execute(name, &cli.args).await);
        return;
    }

    eprintln!("Error: provide --expr, --convert, --tool, or --definitions (see --help)");
    process::exit(2);
}
