//! Domain name and URL generation

use crate::entropy::Entropy;
use crate::error::Result;
use crate::internet::data;
use crate::types::WebProtocol;
use crate::word;

/// Generate a domain word as `adjective-noun`
///
/// Both parts are lowercased; the adjective-then-noun order is fixed.
pub fn domain_word(entropy: &Entropy) -> Result<String> {
    let adjective = word::adjective(entropy)?.to_lowercase();
    let noun = word::noun(entropy)?.to_lowercase();
    Ok(format!("{}-{}", adjective, noun))
}

/// Generate a top-level domain suffix
pub fn domain_suffix(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("internet.domain_suffixes", data::DOMAIN_SUFFIXES)?)
}

/// Generate a full domain name as `word.suffix`
pub fn domain_name(entropy: &Entropy) -> Result<String> {
    Ok(format!("{}.{}", domain_word(entropy)?, domain_suffix(entropy)?))
}

/// Generate a URL
///
/// The protocol defaults to https; an explicit port is appended as `:port`.
pub fn url(entropy: &Entropy, protocol: Option<WebProtocol>, port: Option<u16>) -> Result<String> {
    let scheme = protocol.unwrap_or(WebProtocol::Https).scheme();
    let domain = domain_name(entropy)?;
    Ok(match port {
        Some(port) => format!("{}://{}:{}", scheme, domain, port),
        None => format!("{}://{}", scheme, domain),
    })
}
