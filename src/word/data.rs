//! General-English word tables
//!
//! Entries stay free of hyphens and whitespace so composed values such as
//! `adjective-noun` domain words split cleanly on the joining hyphen.

/// Descriptive adjectives
pub const ADJECTIVES: &[&str] = &[
    "able", "active", "actual", "ample", "best", "better", "big", "bold",
    "brave", "bright", "calm", "cheap", "clean", "clear", "clever", "cool",
    "crisp", "direct", "eager", "early", "easy", "elegant", "fancy", "fast",
    "fine", "firm", "fresh", "friendly", "gentle", "glad", "golden", "grand",
    "great", "happy", "honest", "huge", "ideal", "keen", "kind", "large",
    "light", "lively", "lucky", "major", "modern", "neat", "nice", "noble",
    "novel", "perfect", "plain", "pleasant", "polite", "proud", "pure", "quick",
    "quiet", "rapid", "rare", "rich", "robust", "round", "sharp", "shiny",
    "silent", "simple", "sleek", "small", "smart", "smooth", "soft", "solid",
    "stable", "steady", "strong", "sunny", "super", "swift", "tidy", "tiny",
    "vast", "vivid", "warm", "wise",
];

/// Concrete nouns
pub const NOUNS: &[&str] = &[
    "acorn", "anchor", "apple", "arrow", "badge", "basket", "beacon", "bell",
    "berry", "bird", "boat", "box", "branch", "bridge", "brook", "candle",
    "canyon", "castle", "cave", "cliff", "cloud", "coast", "compass", "coral",
    "crane", "creek", "crystal", "dome", "door", "eagle", "ember", "falcon",
    "feather", "fern", "field", "flame", "forest", "fountain", "fox", "garden",
    "gate", "glacier", "grove", "harbor", "hawk", "hill", "island", "lake",
    "lantern", "leaf", "light", "lion", "maple", "meadow", "mill", "moon",
    "mountain", "oak", "ocean", "orchard", "otter", "owl", "panda", "peak",
    "pebble", "pine", "pond", "prairie", "raven", "reef", "ridge", "river",
    "rock", "rose", "sail", "shore", "sky", "spark", "spring", "star",
    "stone", "stream", "summit", "tiger", "tower", "trail", "tree", "valley",
    "wave", "willow", "wolf", "wren",
];
