//! Text normalization for the merchant name and city fields.
//!
//! Bank apps render these fields with a restricted character set, so the
//! text is folded to upper-case ASCII letters, digits and spaces:
//!
//! 1. Canonical decomposition (NFD), so `ã` becomes `a` + U+0303
//! 2. Combining marks dropped
//! 3. Anything that is not `[A-Za-z0-9 ]` dropped
//! 4. Upper-cased
//! 5. Truncated to the field budget
//! 6. Trimmed
//!
//! Truncation happens before trimming: a name whose 26th character is a
//! space comes out shorter than 25, never longer.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of the merchant name (tag 59).
pub const MAX_NAME_LEN: usize = 25;

/// Maximum length of the merchant city (tag 60).
pub const MAX_CITY_LEN: usize = 15;

/// Normalize `text` and cap it at `max_len` characters.
///
/// Never fails. Input with nothing representable normalizes to `""`.
///
/// ```
/// use supermix_pix_core::normalize::normalize;
///
/// assert_eq!(normalize("João", 25), "JOAO");
/// assert_eq!(normalize("São Paulo", 15), "SAO PAULO");
/// ```
pub fn normalize(text: &str, max_len: usize) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .take(max_len)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    folded.trim().to_string()
}

/// Normalize a merchant name (tag 59).
pub fn normalize_name(name: &str) -> String {
    normalize(name, MAX_NAME_LEN)
}

/// Normalize a merchant city (tag 60).
pub fn normalize_city(city: &str) -> String {
    normalize(city, MAX_CITY_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("João", 25), "JOAO");
        assert_eq!(normalize("São Paulo", 15), "SAO PAULO");
        assert_eq!(normalize("Goiânia", 15), "GOIANIA");
        assert_eq!(normalize("Ação Concreto Ltda.", 25), "ACAO CONCRETO LTDA");
    }

    #[test]
    fn test_precomposed_and_decomposed_agree() {
        let nfc = "Jo\u{00E3}o";
        let nfd = "Joa\u{0303}o";
        assert_eq!(normalize(nfc, 25), normalize(nfd, 25));
    }

    #[test]
    fn test_drops_punctuation_and_symbols() {
        assert_eq!(normalize("Supermix Concreto S/A", 25), "SUPERMIX CONCRETO SA");
        assert_eq!(normalize("R$ 100,00 & cia", 25), "R 10000  CIA");
    }

    #[test]
    fn test_only_ascii_space_survives() {
        assert_eq!(normalize("a\tb\nc\u{00A0}d", 25), "ABCD");
    }

    #[test]
    fn test_truncates_then_trims() {
        let name = "CONCRETEIRA DO VALE NORTE SUL";
        assert_eq!(normalize(name, 25), "CONCRETEIRA DO VALE NORTE");

        // 25th character is a space: truncation keeps it, trim removes it.
        let name = "ABCDEFGHIJKLMNOPQRSTUVWX YZ";
        assert_eq!(&name[24..25], " ");
        assert_eq!(normalize(name, 25), "ABCDEFGHIJKLMNOPQRSTUVWX");
    }

    #[test]
    fn test_leading_whitespace_counts_against_budget() {
        assert_eq!(normalize("   abc", 4), "A");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(normalize("", 25), "");
        assert_eq!(normalize("\u{0301}\u{0303}", 25), "");
        assert_eq!(normalize("日本語", 25), "");
        assert_eq!(normalize("    ", 25), "");
        assert_eq!(normalize("abc", 0), "");
    }

    #[test]
    fn test_wrappers_use_field_budgets() {
        let long = "x".repeat(100);
        assert_eq!(normalize_name(&long).len(), MAX_NAME_LEN);
        assert_eq!(normalize_city(&long).len(), MAX_CITY_LEN);
    }

    proptest! {
        #[test]
        fn test_idempotent(s in any::<String>(), n in 0usize..40) {
            let once = normalize(&s, n);
            prop_assert_eq!(normalize(&once, n), once);
        }

        #[test]
        fn test_truncation_bound(s in any::<String>(), n in 0usize..40) {
            prop_assert!(normalize(&s, n).len() <= n);
        }

        #[test]
        fn test_output_alphabet(s in any::<String>()) {
            let out = normalize(&s, 25);
            prop_assert!(out
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' '));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
