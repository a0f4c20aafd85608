//! General-English word generation

mod data;

pub use data::{ADJECTIVES, NOUNS};

use crate::entropy::Entropy;
use crate::error::Result;

/// Generate a random adjective
pub fn adjective(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("word.adjectives", ADJECTIVES)?)
}

/// Generate a random noun
pub fn noun(entropy: &Entropy) -> Result<&'static str> {
    Ok(*entropy.pick("word.nouns", NOUNS)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjective_is_a_table_member() {
        let entropy = Entropy::new();
        for _ in 0..20 {
            assert!(ADJECTIVES.contains(&adjective(&entropy).unwrap()));
        }
    }

    #[test]
    fn test_noun_is_a_table_member() {
        let entropy = Entropy::new();
        for _ in 0..20 {
            assert!(NOUNS.contains(&noun(&entropy).unwrap()));
        }
    }
}
