//! Property-based tests for the derivation functions
//!
//! Uses proptest to verify that contrast, slug and vCard derivation stay
//! total and deterministic over arbitrary field content.

use proptest::prelude::*;
use tarjeta_core::export::{export_filename, slug};
use tarjeta_core::{color, vcard, CardData};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate well-formed `#rrggbb` color strings
fn hex_color_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[0-9a-fA-F]{6}").expect("valid regex")
}

/// Generate arbitrary short strings, including malformed color input
fn junk_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,12}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Well-formed color pairs always contrast to exactly black or white
    #[test]
    fn contrast_is_total_over_valid_pairs(bg in hex_color_strategy(), text in hex_color_strategy()) {
        let result = color::blended_contrast(&bg, &text);
        prop_assert!(result == color::BLACK || result == color::WHITE);
    }

    /// The contrast function is deterministic
    #[test]
    fn contrast_is_deterministic(bg in hex_color_strategy(), text in hex_color_strategy()) {
        prop_assert_eq!(
            color::blended_contrast(&bg, &text),
            color::blended_contrast(&bg, &text)
        );
    }

    /// Arbitrary input never panics the contrast computation; malformed
    /// input degrades to black
    #[test]
    fn contrast_never_panics(bg in junk_strategy(), text in junk_strategy()) {
        let result = color::blended_contrast(&bg, &text);
        if color::parse_hex(&bg).is_none() || color::parse_hex(&text).is_none() {
            prop_assert_eq!(result, color::BLACK);
        }
    }

    /// Slugs never come out empty and never contain whitespace
    #[test]
    fn slug_is_filename_safe(name in junk_strategy()) {
        let slug = slug(&name);
        prop_assert!(!slug.is_empty());
        prop_assert!(!slug.chars().any(char::is_whitespace));
        prop_assert!(export_filename(&name).ends_with(".png"));
    }

    /// The vCard envelope survives any field content
    #[test]
    fn vcard_keeps_its_envelope(name in junk_strategy(), company in junk_strategy()) {
        let mut card = CardData::default();
        card.full_name = name;
        card.company = company;
        let vcard = vcard::contact_string(&card);
        prop_assert!(vcard.starts_with("BEGIN:VCARD\nVERSION:3.0\nN:"));
        prop_assert!(vcard.ends_with("END:VCARD"));
        prop_assert!(vcard.contains("\nFN:"));
    }
}
