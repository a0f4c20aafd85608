//! Emoji generation

use crate::entropy::Entropy;
use crate::error::Result;
use crate::internet::data;
use crate::types::EmojiType;

/// The lookup table for one emoji category
pub fn emojis_for(category: EmojiType) -> &'static [&'static str] {
    match category {
        EmojiType::Smiley => data::SMILEY_EMOJIS,
        EmojiType::Body => data::BODY_EMOJIS,
        EmojiType::Person => data::PERSON_EMOJIS,
        EmojiType::Nature => data::NATURE_EMOJIS,
        EmojiType::Food => data::FOOD_EMOJIS,
        EmojiType::Travel => data::TRAVEL_EMOJIS,
        EmojiType::Activity => data::ACTIVITY_EMOJIS,
        EmojiType::Object => data::OBJECT_EMOJIS,
        EmojiType::Symbol => data::SYMBOL_EMOJIS,
        EmojiType::Flag => data::FLAG_EMOJIS,
    }
}

const ALL_CATEGORIES: [EmojiType; 10] = [
    EmojiType::Smiley,
    EmojiType::Body,
    EmojiType::Person,
    EmojiType::Nature,
    EmojiType::Food,
    EmojiType::Travel,
    EmojiType::Activity,
    EmojiType::Object,
    EmojiType::Symbol,
    EmojiType::Flag,
];

/// Generate an emoji
///
/// With a category the draw is uniform inside that category's table; without
/// one it is uniform over the union of all ten tables.
pub fn emoji(entropy: &Entropy, category: Option<EmojiType>) -> Result<&'static str> {
    let table = match category {
        Some(category) => emojis_for(category),
        None => {
            let categories: Vec<(&'static [&'static str], u32)> = ALL_CATEGORIES
                .iter()
                .map(|category| {
                    let table = emojis_for(*category);
                    (table, table.len() as u32)
                })
                .collect();
            *entropy.pick_weighted("internet.emojis", &categories)?
        }
    };
    Ok(*entropy.pick("internet.emojis", table)?)
}
