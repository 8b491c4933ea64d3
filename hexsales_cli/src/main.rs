mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hexsales_api::{Client, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "hexsales")]
#[command(about = "Query auction-house sales statistics from HexSales")]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root URL
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all known articles
    Articles,
    /// Search articles by name and attributes
    Search(commands::articles::SearchArgs),
    /// Show a single article
    Article(commands::articles::ArticleArgs),
    /// Daily sales statistics (one article, or filtered across articles)
    Histories(commands::stats::StatsArgs),
    /// Summarized sales statistics (one article, or filtered across articles)
    Summaries(commands::stats::StatsArgs),
    /// List set names
    Sets,
    /// Summary data for every article and timespan
    Pricelist,
    /// Most sold articles per currency
    Mostsold(commands::stats::MostSoldArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hexsales=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let timeout = match cli.timeout {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let client = Client::builder()
        .base_url(&cli.base_url)
        .timeout(timeout)
        .build()?;

    match &cli.command {
        Commands::Articles => commands::articles::run_list(&client, &format)?,
        Commands::Search(args) => commands::articles::run_search(args, &client, &format)?,
        Commands::Article(args) => commands::articles::run_get(args, &client, &format)?,
        Commands::Histories(args) => commands::stats::run_histories(args, &client)?,
        Commands::Summaries(args) => commands::stats::run_summaries(args, &client)?,
        Commands::Sets => commands::stats::run_sets(&client, &format)?,
        Commands::Pricelist => commands::stats::run_price_list(&client)?,
        Commands::Mostsold(args) => commands::stats::run_most_sold(args, &client, &format)?,
    }

    Ok(())
}
