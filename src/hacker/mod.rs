//! Hacker-jargon phrase generation
//!
//! Assembles pseudo-technical sentences from independently drawn
//! abbreviation/adjective/noun/verb tokens.

mod data;

pub use data::{ABBREVIATIONS, ADJECTIVES, INGVERBS, NOUNS, PHRASES, VERBS};

use crate::entropy::Entropy;
use crate::error::Result;

/// Generate a technical abbreviation
pub fn abbreviation(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("hacker.abbreviations", data::ABBREVIATIONS)?)
}

/// Generate a pseudo-technical adjective
pub fn adjective(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("hacker.adjectives", data::ADJECTIVES)?)
}

/// Generate a pseudo-technical noun
pub fn noun(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("hacker.nouns", data::NOUNS)?)
}

/// Generate a pseudo-technical verb
pub fn verb(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("hacker.verbs", data::VERBS)?)
}

/// Generate a present-participle verb
pub fn ingverb(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("hacker.ingverbs", data::INGVERBS)?)
}

/// Generate a full jargon phrase
///
/// Picks one sentence template and replaces each placeholder occurrence with
/// an independent draw from the matching table.
pub fn phrase(entropy: &Entropy) -> Result<String> {
    let mut phrase = entropy.pick("hacker.phrases", data::PHRASES)?.to_string();

    for (name, placeholder, table) in [
        ("hacker.abbreviations", "{abbreviation}", data::ABBREVIATIONS),
        ("hacker.adjectives", "{adjective}", data::ADJECTIVES),
        ("hacker.nouns", "{noun}", data::NOUNS),
        ("hacker.verbs", "{verb}", data::VERBS),
        ("hacker.ingverbs", "{ingverb}", data::INGVERBS),
    ] {
        while phrase.contains(placeholder) {
            let token = *entropy.pick(name, table)?;
            phrase = phrase.replacen(placeholder, token, 1);
        }
    }

    Ok(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_table_members() {
        let entropy = Entropy::new();

        assert!(ABBREVIATIONS.contains(&abbreviation(&entropy).unwrap()));
        assert!(ADJECTIVES.contains(&adjective(&entropy).unwrap()));
        assert!(NOUNS.contains(&noun(&entropy).unwrap()));
        assert!(VERBS.contains(&verb(&entropy).unwrap()));
        assert!(INGVERBS.contains(&ingverb(&entropy).unwrap()));
    }

    #[test]
    fn test_phrase_contains_all_four_categories() {
        let entropy = Entropy::new();

        for _ in 0..50 {
            let phrase = phrase(&entropy).unwrap();

            assert!(ABBREVIATIONS.iter().any(|t| phrase.contains(t)), "{phrase:?}");
            assert!(ADJECTIVES.iter().any(|t| phrase.contains(t)), "{phrase:?}");
            assert!(NOUNS.iter().any(|t| phrase.contains(t)), "{phrase:?}");
            assert!(VERBS.iter().any(|t| phrase.contains(t)), "{phrase:?}");
        }
    }

    #[test]
    fn test_phrase_leaves_no_placeholder_behind() {
        let entropy = Entropy::new();

        for _ in 0..50 {
            let phrase = phrase(&entropy).unwrap();
            assert!(!phrase.contains('{'), "{phrase:?}");
            assert!(!phrase.contains('}'), "{phrase:?}");
        }
    }
}
