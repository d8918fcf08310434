// Typed TR-069 parameter values
//
// Values arrive from the ACS as text. Each data-model parameter declares a
// type, and incoming text is coerced to it (or rejected) before it is stored.

use super::{boolean, date};
use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Declared type of a data-model parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Boolean,
    Int,
    UnsignedInt,
    Float,
    String,
    DateTime,
    /// One of a fixed set of strings
    Enum(Vec<String>),
}

/// A parameter value after coercion
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Boolean(bool),
    Int(i64),
    UnsignedInt(u64),
    Float(f64),
    String(String),
    DateTime(DateTime<Utc>),
    Enum(String),
}

impl ParamType {
    /// Coerce wire text to this type
    pub fn coerce(&self, text: &str) -> CoreResult<ParamValue> {
        match self {
            ParamType::Boolean => boolean::parse(text).map(ParamValue::Boolean),
            ParamType::Int => text
                .trim()
                .parse()
                .map(ParamValue::Int)
                .map_err(|e| CoreError::InvalidValue(format!("{:?} is not an int: {}", text, e))),
            ParamType::UnsignedInt => coerce_unsigned(text).map(ParamValue::UnsignedInt),
            ParamType::Float => text
                .trim()
                .parse()
                .map(ParamValue::Float)
                .map_err(|e| CoreError::InvalidValue(format!("{:?} is not a float: {}", text, e))),
            ParamType::String => Ok(ParamValue::String(text.to_string())),
            ParamType::DateTime => date::parse(text).map(ParamValue::DateTime),
            ParamType::Enum(allowed) => {
                if allowed.iter().any(|v| v == text) {
                    Ok(ParamValue::Enum(text.to_string()))
                } else {
                    Err(CoreError::InvalidValue(format!(
                        "{:?} invalid; allowed values are {:?}",
                        text, allowed
                    )))
                }
            }
        }
    }

    /// The `xsi:type` used for this parameter in SOAP responses
    pub fn xsd_name(&self) -> &'static str {
        match self {
            ParamType::Boolean => "xsd:boolean",
            ParamType::Int => "xsd:int",
            ParamType::UnsignedInt => "xsd:unsignedInt",
            ParamType::Float => "xsd:double",
            ParamType::DateTime => "xsd:dateTime",
            ParamType::String | ParamType::Enum(_) => "xsd:string",
        }
    }
}

fn coerce_unsigned(text: &str) -> CoreResult<u64> {
    let trimmed = text.trim();
    match trimmed.parse::<u64>() {
        Ok(v) => Ok(v),
        Err(_) if trimmed.parse::<i64>().is_ok() => {
            Err(CoreError::InvalidValue(format!("{:?} must be >= 0", text)))
        }
        Err(e) => Err(CoreError::InvalidValue(format!(
            "{:?} is not an unsignedInt: {}",
            text, e
        ))),
    }
}

/// Parses the names used on the command line: `boolean`, `int`,
/// `unsignedInt`, `float`, `string`, `dateTime`, or `enum:a,b,c`.
impl FromStr for ParamType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(values) = s.strip_prefix("enum:") {
            return Ok(ParamType::Enum(
                values.split(',').map(str::to_string).collect(),
            ));
        }

        match s {
            "boolean" | "bool" => Ok(ParamType::Boolean),
            "int" => Ok(ParamType::Int),
            "unsignedInt" | "unsigned" => Ok(ParamType::UnsignedInt),
            "float" | "double" => Ok(ParamType::Float),
            "string" => Ok(ParamType::String),
            "dateTime" | "date" => Ok(ParamType::DateTime),
            _ => Err(CoreError::InvalidValue(format!("unknown parameter type {:?}", s))),
        }
    }
}

impl ParamValue {
    /// Canonical text for the wire
    pub fn to_wire(&self) -> String {
        match self {
            ParamValue::Boolean(b) => boolean::format(*b).to_string(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::UnsignedInt(u) => u.to_string(),
            ParamValue::Float(f) => f.to_string(),
            ParamValue::String(s) | ParamValue::Enum(s) => s.clone(),
            ParamValue::DateTime(dt) => date::format_utc(dt),
        }
    }

    /// `(xsi:type, text)` pair for a SOAP `<Value>` element
    pub fn soapify(&self) -> (&'static str, String) {
        let xsd = match self {
            ParamValue::Boolean(_) => "xsd:boolean",
            ParamValue::Int(_) => "xsd:int",
            ParamValue::UnsignedInt(_) => "xsd:unsignedInt",
            ParamValue::Float(_) => "xsd:double",
            ParamValue::DateTime(_) => "xsd:dateTime",
            ParamValue::String(_) | ParamValue::Enum(_) => "xsd:string",
        };
        (xsd, self.to_wire())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(ParamType::Boolean.coerce("FaLSe").unwrap(), ParamValue::Boolean(false));
        assert_eq!(ParamType::Boolean.coerce("tRuE").unwrap().to_wire(), "1");
        assert!(matches!(
            ParamType::Boolean.coerce("5"),
            Err(CoreError::InvalidBoolean(_))
        ));
        assert!(ParamType::Boolean.coerce("").is_err());
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(ParamType::Int.coerce("8").unwrap(), ParamValue::Int(8));
        assert_eq!(ParamType::Int.coerce("-3").unwrap(), ParamValue::Int(-3));
        assert!(ParamType::Int.coerce("").is_err());

        assert_eq!(ParamType::UnsignedInt.coerce("5").unwrap(), ParamValue::UnsignedInt(5));
        assert_eq!(ParamType::UnsignedInt.coerce("0").unwrap(), ParamValue::UnsignedInt(0));
        let err = ParamType::UnsignedInt.coerce("-5").unwrap_err();
        assert!(err.to_string().contains("must be >= 0"));

        assert_eq!(ParamType::Float.coerce("5").unwrap(), ParamValue::Float(5.0));
        assert_eq!(ParamType::Float.coerce("5e60").unwrap(), ParamValue::Float(5e60));
    }

    #[test]
    fn test_enum_coercion() {
        let kind = ParamType::Enum(vec!["Up".to_string(), "Down".to_string()]);
        assert_eq!(kind.coerce("Up").unwrap(), ParamValue::Enum("Up".to_string()));
        assert!(kind.coerce("up").is_err());
        assert!(kind.coerce("").is_err());
    }

    #[test]
    fn test_string_keeps_empty() {
        assert_eq!(ParamType::String.coerce("").unwrap(), ParamValue::String(String::new()));
    }

    #[test]
    fn test_soapify() {
        assert_eq!(ParamValue::Boolean(true).soapify(), ("xsd:boolean", "1".to_string()));
        assert_eq!(ParamValue::Boolean(false).soapify(), ("xsd:boolean", "0".to_string()));
        assert_eq!(
            ParamValue::UnsignedInt(100).soapify(),
            ("xsd:unsignedInt", "100".to_string())
        );
        assert_eq!(ParamValue::Float(2.5).soapify(), ("xsd:double", "2.5".to_string()));

        let dt = ParamType::DateTime.coerce("1999-12-31T23:59:58Z").unwrap();
        assert_eq!(dt.soapify(), ("xsd:dateTime", "1999-12-31T23:59:58Z".to_string()));
    }

    #[test]
    fn test_type_names() {
        assert_eq!("boolean".parse::<ParamType>().unwrap(), ParamType::Boolean);
        assert_eq!("unsignedInt".parse::<ParamType>().unwrap().xsd_name(), "xsd:unsignedInt");
        assert_eq!(
            "enum:Up,Down".parse::<ParamType>().unwrap(),
            ParamType::Enum(vec!["Up".to_string(), "Down".to_string()])
        );
        assert!("widget".parse::<ParamType>().is_err());
    }
}
