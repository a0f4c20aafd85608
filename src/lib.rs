//! Fixture Forge - randomized but plausible fixture data
//!
//! Generates realistic-looking values for test suites and demos: personal
//! names with locale variants, internet artifacts (emails, usernames,
//! passwords, URLs, IP/MAC addresses, HTTP metadata, emoji) and
//! hacker-style jargon phrases.
//!
//! Every generator takes a shared [`Entropy`] handle, so output is
//! deterministic under a fixed seed and safe to share across threads. The
//! randomness is not cryptographic and generated values are not globally
//! unique.

pub mod entropy;
pub mod error;
pub mod hacker;
pub mod internet;
pub mod person;
pub mod types;
pub mod word;

// Re-export commonly used types
pub use entropy::Entropy;
pub use error::{FixtureForgeError, Result};
pub use types::{
    Country, EmojiType, Gender, HttpHeaderKind, HttpResponseType, IPv4Class, SampleConfig,
    SampleRecord, WebProtocol,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
