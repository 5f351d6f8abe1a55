//! # Text Matching
//!
//! Every textual identifier in the shop is compared without regard to case:
//! DNI equality and species search both go through this module so the rule
//! lives in exactly one place.

/// Returns true when `a` and `b` are equal ignoring case.
///
/// ## Example
/// ```rust
/// use pajareria_core::matching::eq_ignore_case;
///
/// assert!(eq_ignore_case("12345678A", "12345678a"));
/// assert!(!eq_ignore_case("12345678A", "12345678B"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Returns true when `haystack` contains `needle`, ignoring case.
///
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("87654321B", "87654321b"));
        assert!(eq_ignore_case("ñandú", "ÑANDÚ"));
        assert!(!eq_ignore_case("87654321B", "87654321"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Periquito", "RIQ"));
        assert!(contains_ignore_case("Jilguero", ""));
        assert!(!contains_ignore_case("Canario", "loro"));
    }
}
