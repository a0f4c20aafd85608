//! Person name generation with locale variants
//!
//! Maps a locale tag to the matching first-name and last-name tables, split
//! by gender where the source data is gendered, and draws one entry at random.

mod names;

pub use names::{locale_names, LocaleNames};

use crate::entropy::Entropy;
use crate::error::{FixtureForgeError, Result};
use crate::types::{Country, Gender};

/// Generate a first name
///
/// With no gender the draw is uniform over the union of the male and female
/// tables. With no country the baseline locale is used.
pub fn first_name(
    entropy: &Entropy,
    gender: Option<Gender>,
    country: Option<Country>,
) -> Result<&'static str> {
    let tables = locale_names(country.unwrap_or(Country::DEFAULT));

    match gender {
        Some(Gender::Male) => Ok(*entropy.pick("person.male_first_names", tables.male_first)?),
        Some(Gender::Female) => {
            Ok(*entropy.pick("person.female_first_names", tables.female_first)?)
        }
        None => {
            let total = tables.male_first.len() + tables.female_first.len();
            if total == 0 {
                return Err(FixtureForgeError::empty_table("person.first_names"));
            }
            let index = entropy.integer(0, total - 1);
            if index < tables.male_first.len() {
                Ok(tables.male_first[index])
            } else {
                Ok(tables.female_first[index - tables.male_first.len()])
            }
        }
    }
}

/// Generate a last name
pub fn last_name(entropy: &Entropy, country: Option<Country>) -> Result<&'static str> {
    let tables = locale_names(country.unwrap_or(Country::DEFAULT));
    Ok(*entropy.pick("person.last_names", tables.last)?)
}

/// Generate a full `"First Last"` name
pub fn full_name(
    entropy: &Entropy,
    gender: Option<Gender>,
    country: Option<Country>,
) -> Result<String> {
    let first = first_name(entropy, gender, country)?;
    let last = last_name(entropy, country)?;
    Ok(format!("{} {}", first, last))
}
