use anyhow::{bail, Result};
use clap::Args;
use hexsales_api::types::{ArticleType, Currency, Rarity};
use hexsales_api::{Client, DateRange, MostSoldQuery, StatsQuery};

use crate::output::{
    print_json, print_lines, print_most_sold_csv, print_most_sold_table, OutputFormat,
};

#[derive(Args)]
pub struct StatsArgs {
    /// Article uuid; when given, other filters are not allowed
    pub uuid: Option<String>,

    /// First day (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub start: Option<String>,

    /// Last day (YYYY-MM-DD), defaults to --start or today
    #[arg(long)]
    pub end: Option<String>,

    /// Filter by article name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by rarity: epic, legendary, rare, uncommon, common
    #[arg(long)]
    pub rarity: Option<String>,

    /// Filter by type: card, equipment, pack
    #[arg(long = "type")]
    pub article_type: Option<String>,

    /// Filter by set name
    #[arg(long)]
    pub set: Option<String>,

    /// Filter by currency: gold, platinum
    #[arg(long)]
    pub currency: Option<String>,
}

impl StatsArgs {
    fn has_filters(&self) -> bool {
        self.name.is_some()
            || self.rarity.is_some()
            || self.article_type.is_some()
            || self.set.is_some()
            || self.currency.is_some()
    }
}

#[derive(Args)]
pub struct MostSoldArgs {
    /// First day (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub start: Option<String>,

    /// Last day (YYYY-MM-DD), defaults to --start or today
    #[arg(long)]
    pub end: Option<String>,

    /// Articles per currency
    #[arg(long, default_value = "30", allow_negative_numbers = true)]
    pub limit: i64,
}

pub fn run_histories(args: &StatsArgs, client: &Client) -> Result<()> {
    let range = parse_range(args.start.as_deref(), args.end.as_deref())?;
    let histories = match &args.uuid {
        Some(uuid) => {
            ensure_no_filters(args)?;
            client.get_article_histories(uuid, range)?
        }
        None => client.list_histories(&build_stats_query(args, range)?)?,
    };
    print_json(&histories);
    Ok(())
}

pub fn run_summaries(args: &StatsArgs, client: &Client) -> Result<()> {
    let summaries = match &args.uuid {
        Some(uuid) => {
            ensure_no_filters(args)?;
            if args.start.is_some() || args.end.is_some() {
                bail!("article summaries cover fixed timespans; --start/--end are not supported");
            }
            client.get_article_summaries(uuid)?
        }
        None => {
            let range = parse_range(args.start.as_deref(), args.end.as_deref())?;
            client.list_summaries(&build_stats_query(args, range)?)?
        }
    };
    print_json(&summaries);
    Ok(())
}

pub fn run_sets(client: &Client, format: &OutputFormat) -> Result<()> {
    let sets = client.list_sets()?;
    match format {
        OutputFormat::Json => print_json(&sets),
        _ => print_lines(&sets),
    }
    Ok(())
}

pub fn run_price_list(client: &Client) -> Result<()> {
    let prices = client.get_price_list()?;
    eprintln!("{} articles", prices.len());
    print_json(&prices);
    Ok(())
}

pub fn run_most_sold(args: &MostSoldArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = MostSoldQuery::default().with_limit(args.limit);
    if let Some(range) = parse_range(args.start.as_deref(), args.end.as_deref())? {
        query = query.with_range(range);
    }
    let most_sold = client.get_most_sold(&query)?;
    match format {
        OutputFormat::Table => print_most_sold_table(&most_sold),
        OutputFormat::Json => print_json(&most_sold),
        OutputFormat::Csv => print_most_sold_csv(&most_sold)?,
    }
    Ok(())
}

fn ensure_no_filters(args: &StatsArgs) -> Result<()> {
    if args.has_filters() {
        bail!("filters cannot be combined with an article uuid");
    }
    Ok(())
}

/// `None` when neither bound is given, so the client resolves "today" itself.
fn parse_range(start: Option<&str>, end: Option<&str>) -> Result<Option<DateRange>> {
    let range = match (start, end) {
        (None, None) => None,
        (Some(start), None) => Some(DateRange::parse(start, start)?),
        (None, Some(end)) => {
            let today = hexsales_api::today().format(hexsales_api::DATE_FORMAT).to_string();
            Some(DateRange::parse(&today, end)?)
        }
        (Some(start), Some(end)) => Some(DateRange::parse(start, end)?),
    };
    Ok(range)
}

fn build_stats_query(args: &StatsArgs, range: Option<DateRange>) -> Result<StatsQuery> {
    let mut query = StatsQuery {
        range,
        ..StatsQuery::default()
    };
    if let Some(ref name) = args.name {
        query = query.with_name(name);
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
    if let Some(ref currency) = args.currency {
        query = query.with_currency(currency.parse::<Currency>()?);
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> StatsArgs {
        StatsArgs {
            uuid: None,
            start: None,
            end: None,
            name: None,
            rarity: None,
            article_type: None,
            set: None,
            currency: None,
        }
    }

    #[test]
    fn no_bounds_leave_range_to_client() {
        assert_eq!(parse_range(None, None).unwrap(), None);
    }

    #[test]
    fn start_only_is_a_single_day() {
        let range = parse_range(Some("2016-01-01"), None).unwrap().unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(parse_range(Some("2016-02-01"), Some("2016-01-01")).is_err());
    }

    #[test]
    fn stats_filters_parse_enums() {
        let mut args = empty_args();
        args.currency = Some("platinum".to_string());
        args.article_type = Some("equipment".to_string());
        let query = build_stats_query(&args, None).unwrap();
        assert_eq!(query.currency, Some(Currency::Platinum));
        assert_eq!(query.article_type, Some(ArticleType::Equipment));

        args.currency = Some("silver".to_string());
        assert!(build_stats_query(&args, None).is_err());
    }

    #[test]
    fn uuid_excludes_filters() {
        let mut args = empty_args();
        args.uuid = Some("8243c413-2575-461e-87e8-5f203c611223".to_string());
        assert!(ensure_no_filters(&args).is_ok());
        args.name = Some("Runebind".to_string());
        assert!(ensure_no_filters(&args).is_err());
    }
}
