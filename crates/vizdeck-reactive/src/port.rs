use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePortError;

/// A `(component id, property)` pair, written `id.property` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Port {
    pub component: String,
    pub property: String,
}

impl Port {
    pub fn new(component: &str, property: &str) -> Self {
        Self { component: component.to_string(), property: property.to_string() }
    }

    pub fn is(&self, component: &str, property: &str) -> bool {
        self.component == component && self.property == property
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.property)
    }
}

impl FromStr for Port {
    type Err = ParsePortError;

    /// Splits on the last dot; component ids may contain dashes but not dots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((component, property)) if !component.is_empty() && !property.is_empty() => {
                Ok(Self::new(component, property))
            }
            _ => Err(ParsePortError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Port {
    type Error = ParsePortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Port> for String {
    fn from(port: Port) -> Self {
        port.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let port: Port = "kyoto-hotel-bar.clickData".parse().unwrap();
        assert_eq!(port, Port::new("kyoto-hotel-bar", "clickData"));
        assert_eq!(port.to_string(), "kyoto-hotel-bar.clickData");
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!("contents".parse::<Port>().is_err());
        assert!(".children".parse::<Port>().is_err());
        assert!("contents.".parse::<Port>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let port = Port::new("url", "pathname");
        assert_eq!(serde_json::to_value(&port).unwrap(), serde_json::json!("url.pathname"));
        let back: Port = serde_json::from_value(serde_json::json!("url.pathname")).unwrap();
        assert_eq!(back, port);
    }
}
