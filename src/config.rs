use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the menu's element type.
pub const ELEMENT_VAR: &str = "FIXVEC_ELEMENT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown element kind {0:?} in FIXVEC_ELEMENT, expected \"float\" or \"integer\"")]
    UnknownElementKind(String),
}

/// Element type the menu stores its vectors in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    /// `f64`, IEEE division.
    #[default]
    Float,
    /// `i64`, division by zero is reported.
    Integer,
}

impl FromStr for ElementKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" | "f64" => Ok(Self::Float),
            "integer" | "int" | "i64" => Ok(Self::Integer),
            _ => Err(ConfigError::UnknownElementKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub element: ElementKind,
}

impl Config {
    /// Load from environment variables.
    /// ENV vars: FIXVEC_ELEMENT
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let element = match lookup(ELEMENT_VAR) {
            Some(val) => val.parse()?,
            None => ElementKind::default(),
        };

        Ok(Self { element })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.element, ElementKind::Float);
    }

    #[test]
    fn test_element_kind() {
        let config = Config::from_lookup(|key| {
            assert_eq!(key, ELEMENT_VAR);
            Some(" Integer ".to_string())
        })
        .unwrap();
        assert_eq!(config.element, ElementKind::Integer);

        assert_eq!("f64".parse(), Ok(ElementKind::Float));
        assert_eq!(
            Config::from_lookup(|_| Some("complex".to_string())),
            Err(ConfigError::UnknownElementKind("complex".to_string()))
        );
    }
}
