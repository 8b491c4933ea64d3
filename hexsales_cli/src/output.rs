use anyhow::Result;
use hexsales_api::types::{Article, Currency, MostSold};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct ArticleRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Rarity")]
    #[serde(rename = "Rarity")]
    rarity: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    article_type: String,
    #[tabled(rename = "Set")]
    #[serde(rename = "Set")]
    set: String,
    #[tabled(rename = "UUID")]
    #[serde(rename = "UUID")]
    uuid: String,
}

#[derive(Tabled, Serialize)]
struct MostSoldRow {
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Sold")]
    #[serde(rename = "Sold")]
    quantity: String,
}

// -- Row builders --

fn build_article_rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|a| ArticleRow {
            name: a.name.clone(),
            rarity: a.rarity.map(|r| r.to_string()).unwrap_or_default(),
            article_type: a.article_type.map(|t| t.to_string()).unwrap_or_default(),
            set: a.set.clone().unwrap_or_default(),
            uuid: a.uuid.clone(),
        })
        .collect()
}

fn build_most_sold_rows(most_sold: &MostSold) -> Vec<MostSoldRow> {
    Currency::ALL
        .iter()
        .flat_map(|currency| {
            most_sold
                .for_currency(*currency)
                .iter()
                .enumerate()
                .map(move |(i, a)| MostSoldRow {
                    currency: currency.to_string(),
                    rank: i + 1,
                    name: a.name.clone(),
                    quantity: a
                        .extra
                        .get("quantity")
                        .map(|q| q.to_string())
                        .unwrap_or_default(),
                })
        })
        .collect()
}

// -- Table output --

pub fn print_articles_table(articles: &[Article]) {
    println!("{}", Table::new(build_article_rows(articles)));
}

pub fn print_most_sold_table(most_sold: &MostSold) {
    println!("{}", Table::new(build_most_sold_rows(most_sold)));
}

// -- CSV output --

pub fn print_articles_csv(articles: &[Article]) -> Result<()> {
    write_csv(build_article_rows(articles))
}

pub fn print_most_sold_csv(most_sold: &MostSold) -> Result<()> {
    write_csv(build_most_sold_rows(most_sold))
}

fn write_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Plain output --

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_articles_fixture() -> Vec<Article> {
        let json_str = include_str!("../../hexsales_api/tests/fixtures/articles.json");
        serde_json::from_str(json_str).unwrap()
    }

    fn load_most_sold_fixture() -> MostSold {
        let json_str = include_str!("../../hexsales_api/tests/fixtures/mostsold.json");
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn test_build_article_rows_mapping() {
        let rows = build_article_rows(&load_articles_fixture());
        assert_eq!(rows.len(), 3);

        let row = &rows[0];
        assert_eq!(row.name, "Runebind");
        assert_eq!(row.rarity, "Rare");
        assert_eq!(row.article_type, "Card");
        assert_eq!(row.set, "Shards of Fate");
        assert_eq!(row.uuid, "8243c413-2575-461e-87e8-5f203c611223");
    }

    #[test]
    fn test_build_article_rows_missing_fields() {
        let rows = build_article_rows(&load_articles_fixture());
        assert_eq!(rows[2].rarity, "");
        assert_eq!(rows[2].article_type, "Pack");
    }

    #[test]
    fn test_build_most_sold_rows_ranks_per_currency() {
        let rows = build_most_sold_rows(&load_most_sold_fixture());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].currency, "Gold");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].quantity, "96");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[2].currency, "Platinum");
        assert_eq!(rows[2].rank, 1);
        assert_eq!(rows[2].name, "Primal Dawn Booster Pack");
    }

    #[test]
    fn test_article_table_has_headers() {
        let table = Table::new(build_article_rows(&load_articles_fixture())).to_string();
        assert!(table.contains("Name"));
        assert!(table.contains("Rarity"));
        assert!(table.contains("Runebind"));
    }
}
