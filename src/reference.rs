//! Repository reference normalization.
//!
//! A reference is whatever the user typed: `libfoo`, `octo/libfoo`, or a
//! full URL. Normalization expands the shorthand forms into fully-qualified
//! clone URLs. Pure string work — no I/O, and malformed input is passed
//! through rather than rejected (git will complain soon enough).

/// Base URL of the hosting service.
pub const HOST_URL: &str = "https://github.com";

/// Normalize one reference against the default account.
///
/// - `name` becomes `account/name`
/// - anything without a URL scheme gains `https://github.com/` and `.git`
/// - anything already carrying a scheme (`://`) passes through unchanged
#[must_use]
pub fn normalize_reference(reference: &str, account: &str) -> String {
    if reference.contains("://") {
        return reference.to_string();
    }

    let qualified = if reference.contains('/') {
        reference.to_string()
    } else {
        format!("{account}/{reference}")
    };

    format!("{HOST_URL}/{qualified}.git")
}

/// Normalize a list of references, order preserved.
#[must_use]
pub fn normalize_references(references: &[String], account: &str) -> Vec<String> {
    references
        .iter()
        .map(|r| normalize_reference(r, account))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_gains_account_and_host() {
        assert_eq!(
            normalize_reference("libfoo", "octo"),
            "https://github.com/octo/libfoo.git"
        );
    }

    #[test]
    fn test_owner_name_gains_host_only() {
        assert_eq!(
            normalize_reference("octo/libfoo", "someone-else"),
            "https://github.com/octo/libfoo.git"
        );
    }

    #[test]
    fn test_full_url_passes_through_unchanged() {
        let url = "https://github.com/octo/libfoo.git";
        assert_eq!(normalize_reference(url, "octo"), url);
    }

    #[test]
    fn test_non_https_scheme_also_passes_through() {
        let url = "ssh://git@github.com/octo/libfoo.git";
        assert_eq!(normalize_reference(url, "octo"), url);
    }

    #[test]
    fn test_account_prepended_exactly_once() {
        let normalized = normalize_reference("libfoo", "octo");
        assert_eq!(normalized.matches("octo").count(), 1);
    }

    #[test]
    fn test_list_order_preserved() {
        let refs = vec!["octo/libfoo".to_string(), "bar".to_string()];
        assert_eq!(
            normalize_references(&refs, "octo"),
            vec![
                "https://github.com/octo/libfoo.git".to_string(),
                "https://github.com/octo/bar.git".to_string(),
            ]
        );
    }

    #[test]
    fn test_malformed_input_passed_through_not_rejected() {
        // Nonsense still normalizes mechanically; git rejects it later.
        assert_eq!(
            normalize_reference("a/b/c", "octo"),
            "https://github.com/a/b/c.git"
        );
    }
}
