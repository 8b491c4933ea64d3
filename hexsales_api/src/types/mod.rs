mod article;
pub use self::article::{Article, ArticleType, Rarity};

mod set;
pub use self::set::{is_known_set, KNOWN_SETS};

mod stats;
pub use self::stats::{Currency, HistoryRecord, MostSold, PriceList, SummaryRecord, TIMESPANS};
