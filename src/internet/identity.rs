//! Username, email and password generation

use crate::entropy::Entropy;
use crate::error::Result;
use crate::internet::data;
use crate::person;
use crate::types::Country;

/// Minimum length of an anonymous username
pub const ANONYMOUS_USERNAME_MIN_LENGTH: usize = 6;
/// Maximum length of an anonymous username
pub const ANONYMOUS_USERNAME_MAX_LENGTH: usize = 20;

/// Default password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 15;

/// Generate a username from a first and last name
///
/// Explicit name parts are used verbatim, case preserved. Missing parts are
/// drawn from the person tables for the given locale. The two parts are
/// joined by one of three shapes: glued with a 0-999 digit suffix, joined by
/// a separator, or joined by a separator with a 0-99 digit suffix.
pub fn username(
    entropy: &Entropy,
    first: Option<&str>,
    last: Option<&str>,
    country: Option<Country>,
) -> Result<String> {
    let first = match first {
        Some(name) => name.to_string(),
        None => person::first_name(entropy, None, country)?.to_string(),
    };
    let last = match last {
        Some(name) => name.to_string(),
        None => person::last_name(entropy, country)?.to_string(),
    };

    let username = match entropy.integer(0u8, 2) {
        0 => format!("{}{}{}", first, last, entropy.integer(0u32, 999)),
        1 => {
            let separator = entropy.pick("internet.username_separators", data::USERNAME_SEPARATORS)?;
            format!("{}{}{}", first, separator, last)
        }
        _ => {
            let separator = entropy.pick("internet.username_separators", data::USERNAME_SEPARATORS)?;
            format!("{}{}{}{}", first, separator, last, entropy.integer(0u32, 99))
        }
    };

    Ok(username)
}

/// Generate an email address as `username@host`
///
/// The host is drawn from the real-provider table unless supplied explicitly.
pub fn email(
    entropy: &Entropy,
    first: Option<&str>,
    last: Option<&str>,
    host: Option<&str>,
) -> Result<String> {
    let local_part = username(entropy, first, last, None)?;
    let host = match host {
        Some(host) => host.to_string(),
        None => entropy.pick("internet.email_hosts", data::EMAIL_HOSTS)?.to_string(),
    };
    Ok(format!("{}@{}", local_part, host))
}

/// Generate an email address on a reserved documentation domain
pub fn example_email(
    entropy: &Entropy,
    first: Option<&str>,
    last: Option<&str>,
) -> Result<String> {
    let host = *entropy.pick("internet.email_example_hosts", data::EMAIL_EXAMPLE_HOSTS)?;
    email(entropy, first, last, Some(host))
}

/// Generate a password of the requested length (default 15)
///
/// Every character comes from the fixed 90-character alphabet.
pub fn password(entropy: &Entropy, length: Option<usize>) -> Result<String> {
    let length = length.unwrap_or(DEFAULT_PASSWORD_LENGTH);
    random_string(entropy, "internet.password_characters", data::PASSWORD_CHARACTERS, length)
}

/// Generate an anonymous pseudo-username
///
/// The requested length is clamped to `[6, 20]` rather than rejected; callers
/// outside the range get the nearest boundary value.
pub fn anonymous_username(entropy: &Entropy, max_length: usize) -> Result<String> {
    let length = max_length.clamp(ANONYMOUS_USERNAME_MIN_LENGTH, ANONYMOUS_USERNAME_MAX_LENGTH);
    random_string(
        entropy,
        "internet.anonymous_username_characters",
        data::ANONYMOUS_USERNAME_CHARACTERS,
        length,
    )
}

/// Build a string of `length` characters drawn uniformly from an ASCII alphabet
fn random_string(entropy: &Entropy, name: &str, alphabet: &str, length: usize) -> Result<String> {
    let alphabet = alphabet.as_bytes();
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(char::from(*entropy.pick(name, alphabet)?));
    }
    Ok(out)
}
