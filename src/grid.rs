use regex::Regex;
use std::sync::LazyLock;

const MAX_GRID_LEN: usize = 8;

static MAIDENHEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-R][A-R](?:[0-9][0-9][A-X][A-X])*(?:[0-9][0-9])?")
        .expect("maidenhead pattern")
});

/// Leading Maidenhead match, at most 8 characters. Case is kept as received.
pub fn sanitize_grid(grid: &str) -> Option<String> {
    let m = MAIDENHEAD.find(grid)?;
    let kept: String = m.as_str().chars().take(MAX_GRID_LEN).collect();
    (kept.chars().count() > 1).then_some(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_eight_char_locator() {
        assert_eq!(sanitize_grid("fn42aa99").as_deref(), Some("fn42aa99"));
    }

    #[test]
    fn keeps_only_matched_prefix() {
        assert_eq!(sanitize_grid("FN42").as_deref(), Some("FN42"));
        assert_eq!(sanitize_grid("FN42A").as_deref(), Some("FN42"));
        assert_eq!(sanitize_grid("FN42xx/p").as_deref(), Some("FN42xx"));
    }

    #[test]
    fn truncates_long_locators() {
        assert_eq!(sanitize_grid("FN42AA99BB").as_deref(), Some("FN42AA99"));
    }

    #[test]
    fn rejects_non_locators() {
        assert_eq!(sanitize_grid("zz99"), None);
        assert_eq!(sanitize_grid(""), None);
        assert_eq!(sanitize_grid("F"), None);
        assert_eq!(sanitize_grid(" FN42"), None);
    }
}
