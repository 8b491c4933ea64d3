use hexsales_api::types::{
    Article, ArticleType, Currency, HistoryRecord, MostSold, PriceList, Rarity, SummaryRecord,
    TIMESPANS,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_articles() {
    let json = load_fixture("articles.json");
    let articles: Vec<Article> = serde_json::from_str(&json).unwrap();
    assert_eq!(articles.len(), 3);

    let runebind = &articles[0];
    assert_eq!(runebind.uuid, "8243c413-2575-461e-87e8-5f203c611223");
    assert_eq!(runebind.rarity, Some(Rarity::Rare));
    assert_eq!(runebind.article_type, Some(ArticleType::Card));
    assert_eq!(runebind.set.as_deref(), Some("Shards of Fate"));
    assert!(runebind.extra.is_empty());

    let pack = &articles[2];
    assert_eq!(pack.rarity, None);
    assert_eq!(pack.article_type, Some(ArticleType::Pack));
}

#[test]
fn deserialize_minimal_article() {
    let json = load_fixture("article.json");
    let article: Article = serde_json::from_str(&json).unwrap();
    assert_eq!(article.name, "Runebind");
    assert_eq!(article.rarity, None);
    assert_eq!(article.set, None);
}

#[test]
fn deserialize_histories() {
    let json = load_fixture("histories.json");
    let histories: Vec<HistoryRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(histories.len(), 2);
    assert_eq!(histories[0].currency(), Some(Currency::Gold));
    assert_eq!(histories[0].get("med").and_then(|v| v.as_i64()), Some(110));
}

#[test]
fn deserialize_summaries() {
    let json = load_fixture("summaries.json");
    let summaries: Vec<SummaryRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(summaries[0].get("median").and_then(|v| v.as_i64()), Some(115));
    let raw = summaries.into_iter().next().unwrap().into_inner();
    assert_eq!(raw["name"], "Runebind");
}

#[test]
fn deserialize_price_list() {
    let json = load_fixture("pricelist.json");
    let prices: PriceList = serde_json::from_str(&json).unwrap();
    let article = &prices["8243c413-2575-461e-87e8-5f203c611223"];
    assert_eq!(article.len(), 2);
    for timespan in article["gold"].keys() {
        let days: u32 = timespan.parse().unwrap();
        assert!(TIMESPANS.contains(&days));
    }
}

#[test]
fn deserialize_most_sold() {
    let json = load_fixture("mostsold.json");
    let most_sold: MostSold = serde_json::from_str(&json).unwrap();
    let platinum = most_sold.for_currency(Currency::Platinum);
    assert_eq!(platinum.len(), 1);
    assert_eq!(platinum[0].name, "Primal Dawn Booster Pack");
}

#[test]
fn deserialize_unknown_rarity_returns_error() {
    let json = r#"{"uuid": "8243c413-2575-461e-87e8-5f203c611223", "name": "Runebind", "rarity": "Mythic"}"#;
    assert!(serde_json::from_str::<Article>(json).is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"name": "Runebind"}"#;
    assert!(serde_json::from_str::<Article>(json).is_err());
}
