// CWMP boolean codec
//
// TR-069 Amendment 3, Annex A allows exactly "0", "1", "true" and "false".
// Parsing accepts all four (case-insensitive); emitting always uses "1"/"0".

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Parse a CWMP boolean literal
pub fn parse(text: &str) -> CoreResult<bool> {
    if text == "1" || text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text == "0" || text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoreError::InvalidBoolean(text.to_string()))
    }
}

/// Canonical wire form, never "true"/"false"
pub fn format(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Whether `parse` would accept `text`
pub fn is_valid(text: &str) -> bool {
    ["0", "1", "true", "false"]
        .iter()
        .any(|literal| text.eq_ignore_ascii_case(literal))
}

/// A boolean that reads and writes the CWMP grammar, for use in
/// data-model structs and on the wire through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CwmpBool(pub bool);

impl From<bool> for CwmpBool {
    fn from(value: bool) -> Self {
        CwmpBool(value)
    }
}

impl From<CwmpBool> for bool {
    fn from(value: CwmpBool) -> Self {
        value.0
    }
}

impl FromStr for CwmpBool {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(CwmpBool)
    }
}

impl fmt::Display for CwmpBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(format(self.0))
    }
}

impl Serialize for CwmpBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(format(self.0))
    }
}

impl<'de> Deserialize<'de> for CwmpBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepted_literals() {
        assert!(parse("1").unwrap());
        assert!(parse("true").unwrap());
        assert!(parse("True").unwrap());
        assert!(parse("TRUE").unwrap());
        assert!(!parse("0").unwrap());
        assert!(!parse("false").unwrap());
        assert!(!parse("False").unwrap());
        assert!(!parse("FaLsE").unwrap());
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for text in ["", "2", "yes", "no", "on", "booga", " 1", "true ", "01", "t"] {
            assert!(
                matches!(parse(text), Err(CoreError::InvalidBoolean(ref t)) if t == text),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_format_is_numeric() {
        assert_eq!(format(true), "1");
        assert_eq!(format(false), "0");
    }

    #[test]
    fn test_format_canonicalizes_parsed_text() {
        assert_eq!(format(parse("1").unwrap()), "1");
        assert_eq!(format(parse("true").unwrap()), "1");
        assert_eq!(format(parse("FALSE").unwrap()), "0");
    }

    #[test]
    fn test_is_valid_matches_parse() {
        for text in ["0", "1", "true", "false", "TRUE", "False", "", "2", "yes", "booga", "truee"] {
            assert_eq!(is_valid(text), parse(text).is_ok(), "{:?}", text);
        }
    }

    #[test]
    fn test_cwmp_bool_text_and_serde() {
        let value: CwmpBool = "True".parse().unwrap();
        assert_eq!(value, CwmpBool(true));
        assert_eq!(value.to_string(), "1");

        assert_eq!(serde_json::to_string(&CwmpBool(false)).unwrap(), "\"0\"");
        let parsed: CwmpBool = serde_json::from_str("\"false\"").unwrap();
        assert!(!bool::from(parsed));
        assert!(serde_json::from_str::<CwmpBool>("\"yes\"").is_err());
    }
}
