use anyhow::Result;
use clap::Args;
use hexsales_api::types::{ArticleType, Rarity};
use hexsales_api::{Client, SearchQuery};

use crate::output::{print_articles_csv, print_articles_table, print_json, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Article name (exact, case sensitive unless --contains)
    pub name: String,

    /// Official game uuid
    #[arg(long)]
    pub uuid: Option<String>,

    /// Filter by rarity: epic, legendary, rare, uncommon, common
    #[arg(long)]
    pub rarity: Option<String>,

    /// Filter by type: card, equipment, pack
    #[arg(long = "type")]
    pub article_type: Option<String>,

    /// Filter by set name (see `hexsales sets`)
    #[arg(long)]
    pub set: Option<String>,

    /// Maximum number of results
    #[arg(long, default_value = "25", allow_negative_numbers = true)]
    pub limit: i64,

    /// Number of results to skip
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub offset: i64,

    /// Match articles whose name contains NAME (case insensitive)
    #[arg(long)]
    pub contains: bool,
}

#[derive(Args)]
pub struct ArticleArgs {
    /// Official game uuid (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)
    pub uuid: String,
}

pub fn run_list(client: &Client, format: &OutputFormat) -> Result<()> {
    let articles = client.list_articles()?;
    eprintln!("{} articles", articles.len());
    print_articles(&articles, format)
}

pub fn run_search(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_search_query(args)?;
    let articles = client.search_articles(&query)?;
    print_articles(&articles, format)
}

pub fn run_get(args: &ArticleArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let article = client.get_article(&args.uuid)?;
    match format {
        OutputFormat::Json => print_json(&article),
        _ => print_articles(std::slice::from_ref(&article), format)?,
    }
    Ok(())
}

fn build_search_query(args: &SearchArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::new(&args.name)
        .with_limit(args.limit)
        .with_offset(args.offset)
        .with_contains(args.contains);

    if let Some(ref uuid) = args.uuid {
        query = query.with_uuid(uuid);
    }
    if let Some(ref rarity) = args.rarity {
        query = query.with_rarity(rarity.parse::<Rarity>()?);
    }
    if let Some(ref article_type) = args.article_type {
        query = query.with_type(article_type.parse::<ArticleType>()?);
    }
    if let Some(ref set) = args.set {
        query = query.with_set(set);
    }
    Ok(query)
}

fn print_articles(articles: &[hexsales_api::types::Article], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_articles_table(articles),
        OutputFormat::Json => print_json(&articles),
        OutputFormat::Csv => print_articles_csv(articles)?,
    }
    Ok(())
}
