//! Network address generation
//!
//! All hex output is lowercase and every field is fixed-width zero-padded.

use crate::entropy::Entropy;
use crate::types::IPv4Class;

/// Generate an IPv4 address inside a private class range
///
/// Class defaults to `C`. The leading octets follow the class's private-range
/// convention; the rest are randomized.
pub fn ipv4(entropy: &Entropy, class: Option<IPv4Class>) -> String {
    let octets = match class.unwrap_or(IPv4Class::C) {
        IPv4Class::A => [
            10,
            entropy.integer(0u8, 255),
            entropy.integer(0u8, 255),
            entropy.integer(0u8, 255),
        ],
        IPv4Class::B => [
            172,
            entropy.integer(16u8, 31),
            entropy.integer(0u8, 255),
            entropy.integer(0u8, 255),
        ],
        IPv4Class::C => [192, 168, entropy.integer(0u8, 255), entropy.integer(0u8, 255)],
    };
    format_ipv4(octets)
}

/// Generate an IPv4 address constrained by a base address and a bitmask
///
/// Bit positions where the mask is 1 keep the base address's bit; the
/// remaining bits are randomized.
pub fn ipv4_masked(entropy: &Entropy, base: [u8; 4], mask: [u8; 4]) -> String {
    let mut octets = [0u8; 4];
    for (index, octet) in octets.iter_mut().enumerate() {
        let random: u8 = entropy.integer(0, 255);
        *octet = (base[index] & mask[index]) | (random & !mask[index]);
    }
    format_ipv4(octets)
}

/// Generate an IPv6 address: eight colon-separated 4-hex-digit groups
pub fn ipv6(entropy: &Entropy) -> String {
    let groups: Vec<String> = (0..8)
        .map(|_| format!("{:04x}", entropy.integer(0u16, 0xffff)))
        .collect();
    groups.join(":")
}

/// Generate a MAC address: six colon-separated 2-hex-digit groups
pub fn mac(entropy: &Entropy) -> String {
    let groups: Vec<String> = (0..6)
        .map(|_| format!("{:02x}", entropy.integer(0u8, 255)))
        .collect();
    groups.join(":")
}

/// Generate a port number in `[0, 65535]`
pub fn port(entropy: &Entropy) -> u16 {
    entropy.integer(0, u16::MAX)
}

fn format_ipv4(octets: [u8; 4]) -> String {
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octets_of(address: &str) -> Vec<u8> {
        address.split('.').map(|o| o.parse().unwrap()).collect()
    }

    #[test]
    fn test_class_a_fixes_the_first_octet() {
        let entropy = Entropy::new();

        for _ in 0..30 {
            let octets = octets_of(&ipv4(&entropy, Some(IPv4Class::A)));
            assert_eq!(octets[0], 10);
        }
    }

    #[test]
    fn test_class_b_fixes_first_and_bounds_second_octet() {
        let entropy = Entropy::new();

        for _ in 0..30 {
            let octets = octets_of(&ipv4(&entropy, Some(IPv4Class::B)));
            assert_eq!(octets[0], 172);
            assert!((16..=31).contains(&octets[1]));
        }
    }

    #[test]
    fn test_class_c_fixes_the_first_two_octets() {
        let entropy = Entropy::new();

        for _ in 0..30 {
            let octets = octets_of(&ipv4(&entropy, Some(IPv4Class::C)));
            assert_eq!(octets[0], 192);
            assert_eq!(octets[1], 168);
        }
    }

    #[test]
    fn test_default_class_is_c() {
        let entropy = Entropy::new();
        let octets = octets_of(&ipv4(&entropy, None));

        assert_eq!(octets[0], 192);
        assert_eq!(octets[1], 168);
    }

    #[test]
    fn test_masked_generation_preserves_masked_bits() {
        let entropy = Entropy::new();
        let base = [192, 168, 10, 12];
        let mask = [255, 128, 0, 0];

        for _ in 0..30 {
            let octets = octets_of(&ipv4_masked(&entropy, base, mask));
            assert_eq!(octets[0], 192);
            assert_eq!(octets[1] & 0x80, 0x80);
        }
    }

    #[test]
    fn test_ipv6_is_eight_groups_of_four_lowercase_hex() {
        let entropy = Entropy::new();
        let address = ipv6(&entropy);
        let groups: Vec<&str> = address.split(':').collect();

        assert_eq!(groups.len(), 8);
        for group in groups {
            assert_eq!(group.len(), 4);
            assert!(group
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_mac_layout() {
        let entropy = Entropy::new();
        let mac = mac(&entropy);

        assert_eq!(mac.len(), 17);
        for (index, c) in mac.chars().enumerate() {
            if index % 3 == 2 {
                assert_eq!(c, ':');
            } else {
                assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
            }
        }
    }
}
