/// Set names accepted by the search and statistics filters.
///
/// `GET /sets` is authoritative; this list is what the API reported when the
/// client was written and is used to reject misspelled names up front.
pub const KNOWN_SETS: &[&str] = &[
    "AI Only Cards",
    "Armies of Myth",
    "AZ1",
    "AZ2",
    "Dead of Winter",
    "Frostheart",
    "Frostheart Core Commons",
    "Herofall",
    "Primal Dawn",
    "PvE 01 Universal Card Set",
    "Scars of War",
    "Set01 Kickstarter",
    "Set01 PvE Arena",
    "Set01 PvE Holiday",
    "Set03 PvE Promo",
    "Set04 PvE Promo",
    "Set05 PvE Promo",
    "Set06 PvE Promo",
    "Set07 PvE Promo",
    "Set08 PvE Promo",
    "Shards of Fate",
    "Shattered Destiny",
];

/// Returns true if `name` is one of [`KNOWN_SETS`] (exact match).
pub fn is_known_set(name: &str) -> bool {
    KNOWN_SETS.contains(&name)
}
