mod common;
pub(crate) use self::common::{append_params, parse_date};
pub use self::common::{today, DateRange, Param, Params, Query, DATE_FORMAT};

mod search;
pub use self::search::SearchQuery;

mod stats;
pub use self::stats::{MostSoldQuery, StatsQuery};
