use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GenError;
use crate::generators::network::IpPrefix;
use crate::generators::time::TimeRecord;

pub const DEFAULT_LENGTH: usize = 10;
pub const MAX_BATCH: usize = 1000;
/// Largest `length`, and largest `words * paragraphs`, a single value may ask for.
pub const MAX_LENGTH: usize = 65_536;

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_true() -> bool {
    true
}

fn default_delimiter() -> String {
    ":".to_string()
}

fn default_min_cidr() -> usize {
    1
}

fn default_max_cidr() -> usize {
    31
}

fn default_paragraphs() -> usize {
    1
}

fn default_min() -> i64 {
    i64::MIN
}

fn default_max() -> i64 {
    i64::MAX
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StringKind {
    Alpha,
    Alphanumeric,
    Cjk,
    Cyrillic,
    Html,
    Latin1,
    Numeric,
    Punctuation,
    Utf8,
}

/// Generator selection with tagged serialisation.
/// Serialises to: {"type": "ipaddr", "ipv6": true, "prefix": [8193]}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorType {
    Alpha {
        #[serde(default = "default_length")]
        #[schema(example = 10)]
        length: usize,
    },
    Alphanumeric {
        #[serde(default = "default_length")]
        length: usize,
    },
    Numeric {
        #[serde(default = "default_length")]
        length: usize,
    },
    Punctuation {
        #[serde(default = "default_length")]
        length: usize,
    },
    Cjk {
        #[serde(default = "default_length")]
        length: usize,
    },
    Cyrillic {
        #[serde(default = "default_length")]
        length: usize,
    },
    Latin1 {
        #[serde(default = "default_length")]
        length: usize,
    },
    Utf8 {
        #[serde(default = "default_length")]
        length: usize,
    },
    #[serde(rename = "string")]
    Text {
        kind: StringKind,
        #[serde(default = "default_length")]
        length: usize,
    },
    Bool,
    Integer {
        #[serde(default = "default_min")]
        min: i64,
        #[serde(default = "default_max")]
        max: i64,
    },
    Email {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        domain: Option<String>,
        #[serde(default)]
        tld: Option<String>,
    },
    Url {
        #[serde(default)]
        extended: bool,
    },
    Ipaddr {
        #[serde(default)]
        three_octet: bool,
        #[serde(default)]
        ipv6: bool,
        #[serde(default)]
        prefix: IpPrefix,
    },
    Mac {
        #[serde(default = "default_delimiter")]
        #[schema(example = ":")]
        delimiter: String,
    },
    Netmask {
        #[serde(default = "default_min_cidr")]
        min_cidr: usize,
        #[serde(default = "default_max_cidr")]
        max_cidr: usize,
    },
    Uuid {
        #[serde(default = "default_true")]
        valid: bool,
    },
    Html {
        #[serde(default = "default_length")]
        length: usize,
    },
    Ipsum {
        /// 0 means the full source text.
        #[serde(default)]
        words: usize,
        #[serde(default = "default_paragraphs")]
        paragraphs: usize,
    },
    Time,
}

impl GeneratorType {
    /// Rejects sizes that would tie up the generator for too long.
    pub fn check_size(&self) -> Result<(), GenError> {
        let requested = match self {
            Self::Alpha { length }
            | Self::Alphanumeric { length }
            | Self::Numeric { length }
            | Self::Punctuation { length }
            | Self::Cjk { length }
            | Self::Cyrillic { length }
            | Self::Latin1 { length }
            | Self::Utf8 { length }
            | Self::Text { length, .. }
            | Self::Html { length } => *length,
            Self::Ipsum { words, paragraphs } => (*words).max(1).saturating_mul(*paragraphs),
            _ => return Ok(()),
        };
        if requested > MAX_LENGTH {
            return Err(GenError::invalid(format!(
                "requested size {requested} exceeds the limit of {MAX_LENGTH}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum GeneratedValue {
    Text(String),
    Flag(bool),
    Integer(i64),
    Time(TimeRecord),
}

impl From<String> for GeneratedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for GeneratedValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for GeneratedValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<TimeRecord> for GeneratedValue {
    fn from(value: TimeRecord) -> Self {
        Self::Time(value)
    }
}

/// A batch of values from one generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub generator: GeneratorType,
    #[serde(default = "default_count")]
    #[schema(example = 1)]
    pub count: usize,
}

impl GenerateRequest {
    pub fn single(generator: GeneratorType) -> Self {
        Self {
            generator,
            count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let request: GenerateRequest = serde_json::from_str(r#"{"type": "alpha"}"#).unwrap();
        assert_eq!(request.generator, GeneratorType::Alpha { length: 10 });
        assert_eq!(request.count, 1);

        let generator: GeneratorType = serde_json::from_str(r#"{"type": "netmask"}"#).unwrap();
        assert_eq!(
            generator,
            GeneratorType::Netmask {
                min_cidr: 1,
                max_cidr: 31
            }
        );
    }

    #[test]
    fn ip_prefix_accepts_numbers_or_text() {
        let generator: GeneratorType =
            serde_json::from_str(r#"{"type": "ipaddr", "prefix": [10, 3]}"#).unwrap();
        assert!(matches!(
            generator,
            GeneratorType::Ipaddr { prefix: IpPrefix::Fields(ref f), .. } if f == &[10, 3]
        ));

        let generator: GeneratorType =
            serde_json::from_str(r#"{"type": "ipaddr", "prefix": ["fe80"], "ipv6": true}"#)
                .unwrap();
        assert!(matches!(
            generator,
            GeneratorType::Ipaddr { prefix: IpPrefix::Text(_), ipv6: true, .. }
        ));
    }

    #[test]
    fn unit_variants_and_counts() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"type": "time", "count": 3}"#).unwrap();
        assert_eq!(request.generator, GeneratorType::Time);
        assert_eq!(request.count, 3);
    }

    #[test]
    fn string_kind_is_lowercase() {
        let generator: GeneratorType =
            serde_json::from_str(r#"{"type": "string", "kind": "latin1", "length": 4}"#).unwrap();
        assert_eq!(
            generator,
            GeneratorType::Text {
                kind: StringKind::Latin1,
                length: 4
            }
        );
    }

    #[test]
    fn size_limit_covers_lengths_and_ipsum() {
        assert!(GeneratorType::Utf8 { length: MAX_LENGTH }.check_size().is_ok());
        assert!(matches!(
            GeneratorType::Utf8 { length: MAX_LENGTH + 1 }.check_size(),
            Err(GenError::InvalidArgument(_))
        ));
        let ipsum = GeneratorType::Ipsum {
            words: MAX_LENGTH,
            paragraphs: 2,
        };
        assert!(ipsum.check_size().is_err());
        let ipsum = GeneratorType::Ipsum {
            words: usize::MAX,
            paragraphs: usize::MAX,
        };
        assert!(ipsum.check_size().is_err());
        let ipsum = GeneratorType::Ipsum {
            words: 0,
            paragraphs: MAX_LENGTH + 1,
        };
        assert!(ipsum.check_size().is_err());
        assert!(GeneratorType::Time.check_size().is_ok());
    }

    #[test]
    fn values_serialise_untagged() {
        assert_eq!(
            serde_json::to_string(&GeneratedValue::from("x".to_string())).unwrap(),
            r#""x""#
        );
        assert_eq!(serde_json::to_string(&GeneratedValue::from(true)).unwrap(), "true");
    }
}
