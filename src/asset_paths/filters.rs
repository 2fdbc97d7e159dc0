use regex::Regex;

fn reference_ignores() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://").expect("invalid scheme regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"^#").expect("invalid fragment regex"),
                Regex::new(r"(?i)^%23").expect("invalid escaped fragment regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a stylesheet reference should be left alone.
///
/// Remote URLs, data URIs and fragment-only references have no local file behind them.
/// Root-relative references (`/img/a.png`) only make sense when a base path tells us
/// where the root is, so they are skipped otherwise.
pub fn should_ignore_reference(value: &str, has_base_path: bool) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }

    if reference_ignores()
        .iter()
        .any(|pattern| pattern.is_match(value))
    {
        return true;
    }

    value.starts_with('/') && !has_base_path
}
