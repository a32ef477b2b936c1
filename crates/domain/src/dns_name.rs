use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// A domain name compared by value.
///
/// Names are stored lowercased and without the trailing root dot, so
/// `"NS1.Example.com."` and `"ns1.example.com"` are the same name. Display
/// always renders the fully-qualified form (`ns1.example.com.`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DnsName(String);

impl DnsName {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Self::build(input, true)
    }

    /// Builds a name from the escaped presentation form of a name that was
    /// already decoded from the wire (`\001` for a binary octet).
    ///
    /// Octet limits were enforced by the decoder and escapes inflate the text,
    /// so lengths are not checked again.
    pub fn from_wire_text(text: &str) -> Result<Self, DomainError> {
        Self::build(text, false)
    }

    fn build(input: &str, check_lengths: bool) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let without_root = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if without_root.is_empty() {
            if trimmed == "." {
                return Ok(Self::root());
            }
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is empty",
                input
            )));
        }

        if check_lengths && without_root.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} characters",
                input, MAX_NAME_LEN
            )));
        }

        for label in without_root.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    input
                )));
            }
            if check_lengths && label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' in '{}' exceeds {} characters",
                    label, input, MAX_LABEL_LEN
                )));
            }
            if label.chars().any(|c| c.is_whitespace()) {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains whitespace",
                    input
                )));
            }
        }

        Ok(Self(without_root.to_ascii_lowercase()))
    }

    /// Name without the trailing dot; empty for the root.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_fqdn(&self) -> String {
        format!("{}.", self.0)
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str(".")
        } else {
            write!(f, "{}.", self.0)
        }
    }
}

impl FromStr for DnsName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DnsName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DnsName> for String {
    fn from(name: DnsName) -> Self {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_dot_and_case_compare_equal() {
        let a = DnsName::parse("ns1.example.com").unwrap();
        let b = DnsName::parse("NS1.Example.COM.").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "ns1.example.com");
    }

    #[test]
    fn test_display_is_fully_qualified() {
        let name = DnsName::parse("example.com").unwrap();
        assert_eq!(name.to_string(), "example.com.");
        assert_eq!(DnsName::root().to_string(), ".");
    }

    #[test]
    fn test_wire_text_skips_length_limits() {
        let escaped = format!("{}.example.com.", "\\001".repeat(20));

        assert!(DnsName::parse(&escaped).is_err());
        let name = DnsName::from_wire_text(&escaped).unwrap();
        assert_eq!(name.to_string(), escaped);
        assert!(DnsName::from_wire_text("a..b").is_err());
    }

    #[test]
    fn test_root_parses() {
        assert!(DnsName::parse(".").unwrap().is_root());
    }

    #[test]
    fn test_rejects_malformed_names() {
        assert!(DnsName::parse("").is_err());
        assert!(DnsName::parse("a..b").is_err());
        assert!(DnsName::parse(&"x".repeat(64)).is_err());
        assert!(DnsName::parse("bad name.com").is_err());
    }
}
