//! Typed table cells.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One table cell, typed on load: integers, then floats, then text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Datum {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl Datum {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Datum::Empty;
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Datum::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Datum::Float(f);
        }
        Datum::Text(raw.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Int(i) => Some(*i as f64),
            Datum::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Exact equality against a JSON selection value. Numbers compare
    /// numerically; strings never match numbers.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Datum::Text(s), Value::String(v)) => s == v,
            (Datum::Int(i), Value::Number(n)) => match n.as_i64() {
                Some(v) => v == *i,
                None => n.as_f64() == Some(*i as f64),
            },
            (Datum::Float(f), Value::Number(n)) => n.as_f64() == Some(*f),
            (Datum::Empty, Value::Null) => true,
            _ => false,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Datum::Int(i) => Value::from(*i),
            Datum::Float(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Datum::Text(s) => Value::String(s.clone()),
            Datum::Empty => Value::Null,
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Int(i) => write!(f, "{i}"),
            Datum::Float(v) => write!(f, "{v}"),
            Datum::Text(s) => f.write_str(s),
            Datum::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_prefers_integers() {
        assert_eq!(Datum::parse("2019"), Datum::Int(2019));
        assert_eq!(Datum::parse(" 35.01 "), Datum::Float(35.01));
        assert_eq!(Datum::parse("中国"), Datum::Text("中国".into()));
        assert_eq!(Datum::parse(""), Datum::Empty);
    }

    #[test]
    fn test_matches_is_type_strict() {
        assert!(Datum::Int(2019).matches(&json!(2019)));
        assert!(Datum::Int(2019).matches(&json!(2019.0)));
        assert!(!Datum::Int(2019).matches(&json!("2019")));
        assert!(Datum::Text("all".into()).matches(&json!("all")));
        assert!(!Datum::Float(1.5).matches(&json!(2)));
    }

    #[test]
    fn test_nan_serialises_as_null() {
        assert_eq!(Datum::Float(f64::NAN).to_value(), Value::Null);
    }
}
