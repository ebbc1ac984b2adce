//! Email normalization and a light shape check.

/// Canonical form stored in the waitlist: trimmed and lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `email` looks like `local@domain.tld`.
///
/// Mirrors what a browser `type="email"` field accepts closely enough to
/// catch typos; the store stays the authority on uniqueness.
pub fn is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
