//! Hacker-jargon lookup tables
//!
//! Every phrase template names all four core lexical categories at least
//! once, so each assembled sentence carries an abbreviation, an adjective,
//! a noun and a verb.

/// Technical abbreviations
pub const ABBREVIATIONS: &[&str] = &[
    "TCP", "HTTP", "SDD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI", "ADP",
    "RSS", "XML", "EXE", "COM", "HDD", "THX", "SMTP", "SMS", "USB", "PNG", "SAS", "JBOD",
    "SCSI", "JSON", "XSS", "JVM", "GPU",
];

/// Pseudo-technical adjectives
pub const ADJECTIVES: &[&str] = &[
    "auxiliary", "primary", "back-end", "digital", "open-source", "virtual", "cross-platform",
    "redundant", "online", "haptic", "multi-byte", "bluetooth", "wireless", "1080p", "neural",
    "optical", "solid state", "mobile",
];

/// Pseudo-technical nouns
pub const NOUNS: &[&str] = &[
    "driver", "protocol", "bandwidth", "panel", "microchip", "program", "port", "card",
    "array", "interface", "system", "sensor", "firewall", "hard drive", "pixel", "alarm",
    "feed", "monitor", "application", "transmitter", "bus", "circuit", "capacitor", "matrix",
];

/// Pseudo-technical verbs
pub const VERBS: &[&str] = &[
    "back up", "bypass", "hack", "override", "compress", "copy", "navigate", "index",
    "connect", "generate", "quantify", "calculate", "synthesize", "input", "transmit",
    "program", "reboot", "parse",
];

/// Present-participle verbs
pub const INGVERBS: &[&str] = &[
    "backing up", "bypassing", "hacking", "overriding", "compressing", "copying", "navigating",
    "indexing", "connecting", "generating", "quantifying", "calculating", "synthesizing",
    "transmitting", "programming", "parsing",
];

/// Sentence templates assembled by the phrase generator
pub const PHRASES: &[&str] = &[
    "If we {verb} the {noun}, we can get to the {abbreviation} {noun} through the {adjective} {abbreviation} {noun}!",
    "We need to {verb} the {adjective} {abbreviation} {noun}!",
    "Try to {verb} the {abbreviation} {noun}, maybe it will {verb} the {adjective} {noun}!",
    "You can't {verb} the {noun} without {ingverb} the {adjective} {abbreviation} {noun}!",
    "Use the {adjective} {abbreviation} {noun}, then you can {verb} the {adjective} {noun}!",
    "The {abbreviation} {noun} is down, {verb} the {adjective} {noun} so we can {verb} the {abbreviation} {noun}!",
    "{ingverb} the {noun} won't do anything, we need to {verb} the {adjective} {abbreviation} {noun}!",
    "I'll {verb} the {adjective} {abbreviation} {noun}, that should {verb} the {abbreviation} {noun}!",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_non_empty() {
        assert!(!ABBREVIATIONS.is_empty());
        assert!(!ADJECTIVES.is_empty());
        assert!(!NOUNS.is_empty());
        assert!(!VERBS.is_empty());
        assert!(!INGVERBS.is_empty());
        assert!(!PHRASES.is_empty());
    }

    #[test]
    fn test_every_template_names_all_four_core_categories() {
        for template in PHRASES {
            for placeholder in ["{abbreviation}", "{adjective}", "{noun}", "{verb}"] {
                assert!(
                    template.contains(placeholder),
                    "{template:?} is missing {placeholder}"
                );
            }
        }
    }
}
