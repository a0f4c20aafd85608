//! Core types and structures for fixture-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FixtureForgeError;

/// Gender selector for name tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Locale tag selecting which name tables to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    England,
    France,
    Germany,
    Italy,
    Romania,
    SouthAfrica,
}

impl Country {
    /// Baseline locale used when none is specified
    pub const DEFAULT: Country = Country::England;
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Country::England => write!(f, "england"),
            Country::France => write!(f, "france"),
            Country::Germany => write!(f, "germany"),
            Country::Italy => write!(f, "italy"),
            Country::Romania => write!(f, "romania"),
            Country::SouthAfrica => write!(f, "southafrica"),
        }
    }
}

impl std::str::FromStr for Country {
    type Err = FixtureForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "england" => Ok(Country::England),
            "france" => Ok(Country::France),
            "germany" => Ok(Country::Germany),
            "italy" => Ok(Country::Italy),
            "romania" => Ok(Country::Romania),
            "southafrica" => Ok(Country::SouthAfrica),
            other => Err(FixtureForgeError::unsupported_locale(other)),
        }
    }
}

/// Private IPv4 address class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IPv4Class {
    A,
    B,
    C,
}

impl std::fmt::Display for IPv4Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IPv4Class::A => write!(f, "a"),
            IPv4Class::B => write!(f, "b"),
            IPv4Class::C => write!(f, "c"),
        }
    }
}

/// Web protocol for URL generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebProtocol {
    Http,
    Https,
}

impl WebProtocol {
    /// Scheme string as it appears in a URL
    pub fn scheme(&self) -> &'static str {
        match self {
            WebProtocol::Http => "http",
            WebProtocol::Https => "https",
        }
    }
}

impl std::fmt::Display for WebProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.scheme())
    }
}

/// HTTP status code response class (1xx through 5xx)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpResponseType {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl std::fmt::Display for HttpResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpResponseType::Informational => write!(f, "informational"),
            HttpResponseType::Success => write!(f, "success"),
            HttpResponseType::Redirection => write!(f, "redirection"),
            HttpResponseType::ClientError => write!(f, "clienterror"),
            HttpResponseType::ServerError => write!(f, "servererror"),
        }
    }
}

/// Which side of an HTTP exchange a header belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpHeaderKind {
    Request,
    Response,
}

impl std::fmt::Display for HttpHeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpHeaderKind::Request => write!(f, "request"),
            HttpHeaderKind::Response => write!(f, "response"),
        }
    }
}

/// Emoji category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiType {
    Smiley,
    Body,
    Person,
    Nature,
    Food,
    Travel,
    Activity,
    Object,
    Symbol,
    Flag,
}

impl std::fmt::Display for EmojiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmojiType::Smiley => write!(f, "smiley"),
            EmojiType::Body => write!(f, "body"),
            EmojiType::Person => write!(f, "person"),
            EmojiType::Nature => write!(f, "nature"),
            EmojiType::Food => write!(f, "food"),
            EmojiType::Travel => write!(f, "travel"),
            EmojiType::Activity => write!(f, "activity"),
            EmojiType::Object => write!(f, "object"),
            EmojiType::Symbol => write!(f, "symbol"),
            EmojiType::Flag => write!(f, "flag"),
        }
    }
}

/// One generated sample emitted by the demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub category: String,
    pub value: String,
    pub generated_at: DateTime<Utc>,
}

/// Configuration for the demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    pub count: usize,
    pub locale: Country,
    pub seed: Option<u64>,
    pub json: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 1,
            locale: Country::DEFAULT,
            seed: None,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_country_round_trip() {
        for country in [
            Country::England,
            Country::France,
            Country::Germany,
            Country::Italy,
            Country::Romania,
            Country::SouthAfrica,
        ] {
            let tag = country.to_string();
            assert_eq!(Country::from_str(&tag).unwrap(), country);
        }
    }

    #[test]
    fn test_unknown_locale_is_an_error() {
        let err = Country::from_str("atlantis").unwrap_err();
        assert_eq!(
            err,
            FixtureForgeError::UnsupportedLocale {
                locale: "atlantis".to_string()
            }
        );
    }

    #[test]
    fn test_web_protocol_scheme() {
        assert_eq!(WebProtocol::Http.scheme(), "http");
        assert_eq!(WebProtocol::Https.scheme(), "https");
    }
}
