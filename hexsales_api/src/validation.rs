//! Declarative parameter validation.
//!
//! Every operation lists its parameters as [`Params`] and checks them against
//! a [`Schema`] before any URL is built. A schema maps parameter names to a
//! [`Rule`]; [`PARAMETERS`] covers every parameter the API accepts.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    query::{parse_date, Param},
    types::{ArticleType, Currency, Rarity, KNOWN_SETS},
    Error,
};

pub const MAX_NAME_LENGTH: usize = 100;

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

/// Constraint on a single parameter value.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Text without control characters, at most [`MAX_NAME_LENGTH`] chars.
    Text,
    /// Canonical 8-4-4-4-12 hex uuid.
    Uuid,
    /// Exactly one of the listed values.
    OneOf(&'static [&'static str]),
    /// Integer greater than zero.
    PositiveInt,
    /// Integer greater than or equal to zero.
    NonNegativeInt,
    /// `YYYY-MM-DD` calendar date.
    Date,
    /// Boolean.
    Flag,
}

/// Field name to rule table.
#[derive(Clone, Copy, Debug)]
pub struct Schema(pub &'static [(&'static str, Rule)]);

impl Schema {
    pub fn rule(&self, field: &str) -> Option<Rule> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rule)| *rule)
    }
}

/// Rules for every parameter the HexSales API accepts.
pub const PARAMETERS: Schema = Schema(&[
    ("name", Rule::Text),
    ("uuid", Rule::Uuid),
    ("rarity", Rule::OneOf(Rarity::NAMES)),
    ("type", Rule::OneOf(ArticleType::NAMES)),
    ("set", Rule::OneOf(KNOWN_SETS)),
    ("currency", Rule::OneOf(Currency::NAMES)),
    ("limit", Rule::PositiveInt),
    ("offset", Rule::NonNegativeInt),
    ("contains", Rule::Flag),
    ("start", Rule::Date),
    ("end", Rule::Date),
]);

/// Checks every parameter against its rule. Parameters the schema does not
/// know are rejected.
pub fn validate(schema: &Schema, params: &[(&str, Param)]) -> Result<(), Error> {
    for (field, value) in params {
        let rule = schema
            .rule(field)
            .ok_or_else(|| Error::validation(*field, "unknown parameter"))?;
        check(rule, field, value)?;
    }
    Ok(())
}

/// Validates a single article uuid.
pub fn validate_uuid(uuid: &str) -> Result<(), Error> {
    check(Rule::Uuid, "uuid", &Param::Text(uuid.to_string()))
}

fn check(rule: Rule, field: &str, value: &Param) -> Result<(), Error> {
    match (rule, value) {
        (Rule::Text, Param::Text(s)) => {
            if s.chars().count() > MAX_NAME_LENGTH {
                Err(Error::validation(
                    field,
                    format!("exceeds maximum length of {} characters", MAX_NAME_LENGTH),
                ))
            } else if s.chars().any(|c| c.is_control()) {
                Err(Error::validation(field, "contains control characters"))
            } else {
                Ok(())
            }
        }
        (Rule::Uuid, Param::Text(s)) => {
            if UUID_RE.is_match(s) {
                Ok(())
            } else {
                Err(Error::validation(
                    field,
                    format!("'{}' is not a uuid (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)", s),
                ))
            }
        }
        (Rule::OneOf(allowed), Param::Text(s)) => {
            if allowed.contains(&s.as_str()) {
                Ok(())
            } else {
                Err(Error::validation(
                    field,
                    format!("'{}' is not one of {}", s, allowed.join(", ")),
                ))
            }
        }
        (Rule::PositiveInt, Param::Int(i)) => {
            if *i > 0 {
                Ok(())
            } else {
                Err(Error::validation(field, format!("must be positive, got {}", i)))
            }
        }
        (Rule::NonNegativeInt, Param::Int(i)) => {
            if *i >= 0 {
                Ok(())
            } else {
                Err(Error::validation(
                    field,
                    format!("must not be negative, got {}", i),
                ))
            }
        }
        (Rule::Date, Param::Text(s)) => parse_date(field, s).map(|_| ()),
        (Rule::Flag, Param::Flag(_)) => Ok(()),
        (rule, value) => Err(Error::validation(
            field,
            format!("expected {}, got '{}'", expected(rule), value),
        )),
    }
}

fn expected(rule: Rule) -> &'static str {
    match rule {
        Rule::Text | Rule::Uuid | Rule::OneOf(_) | Rule::Date => "text",
        Rule::PositiveInt | Rule::NonNegativeInt => "an integer",
        Rule::Flag => "a boolean",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Param {
        Param::Text(s.to_string())
    }

    #[test]
    fn accepts_valid_parameters() {
        let params = vec![
            ("name", text("Runebind")),
            ("uuid", text("8243c413-2575-461e-87e8-5f203c611223")),
            ("rarity", text("Legendary")),
            ("type", text("Equipment")),
            ("set", text("Herofall")),
            ("currency", text("Gold")),
            ("limit", Param::Int(1)),
            ("offset", Param::Int(0)),
            ("contains", Param::Flag(true)),
            ("start", text("2016-01-01")),
            ("end", text("2016-12-31")),
        ];
        assert!(validate(&PARAMETERS, &params).is_ok());
    }

    #[test]
    fn absent_parameters_skip_validation() {
        assert!(validate(&PARAMETERS, &[]).is_ok());
    }

    #[test]
    fn rejects_values_outside_enums() {
        for (field, value) in [
            ("rarity", "Mythic"),
            ("rarity", "epic"),
            ("type", "Deck"),
            ("set", "Shards Of Fate"),
            ("currency", "Silver"),
        ] {
            let err = validate(&PARAMETERS, &[(field, text(value))]).unwrap_err();
            match err {
                Error::Validation { field: f, .. } => assert_eq!(f, field),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_positive_limit() {
        for limit in [0, -1, i64::MIN] {
            assert!(validate(&PARAMETERS, &[("limit", Param::Int(limit))]).is_err());
        }
        assert!(validate(&PARAMETERS, &[("offset", Param::Int(-1))]).is_err());
        assert!(validate(&PARAMETERS, &[("offset", Param::Int(0))]).is_ok());
    }

    #[test]
    fn rejects_wrong_kind() {
        assert!(validate(&PARAMETERS, &[("limit", text("25"))]).is_err());
        assert!(validate(&PARAMETERS, &[("contains", text("true"))]).is_err());
        assert!(validate(&PARAMETERS, &[("name", Param::Int(3))]).is_err());
    }

    #[test]
    fn rejects_unknown_parameter() {
        let err = validate(&PARAMETERS, &[("hex_set", text("Herofall"))]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for `hex_set`: unknown parameter");
    }

    #[test]
    fn uuid_pattern() {
        assert!(validate_uuid("8243c413-2575-461e-87e8-5f203c611223").is_ok());
        assert!(validate_uuid("8243C413-2575-461E-87E8-5F203C611223").is_ok());
        for bad in [
            "",
            "8243c413257546187e85f203c611223",
            "8243c413-2575-461e-87e8-5f203c61122",
            "8243c413-2575-461e-87e8-5f203c6112234",
            "g243c413-2575-461e-87e8-5f203c611223",
            "8243c413_2575_461e_87e8_5f203c611223",
            "../sets",
        ] {
            assert!(validate_uuid(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn text_rule() {
        // an empty name lists everything on the server
        assert!(validate(&PARAMETERS, &[("name", text(""))]).is_ok());
        assert!(validate(&PARAMETERS, &[("name", text("   "))]).is_ok());
        assert!(validate(&PARAMETERS, &[("name", text("Rune\u{0}bind"))]).is_err());
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate(&PARAMETERS, &[("name", text(&long))]).is_err());
    }

    #[test]
    fn date_rule() {
        assert!(validate(&PARAMETERS, &[("start", text("2016-01-01"))]).is_ok());
        assert!(validate(&PARAMETERS, &[("end", text("2016-13-01"))]).is_err());
        assert!(validate(&PARAMETERS, &[("end", text("01-01-2016"))]).is_err());
    }
}
