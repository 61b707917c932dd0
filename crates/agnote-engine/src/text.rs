/// First `max` characters of `s` (never splits a character)
pub fn take_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `s` cut to `keep` characters plus "..." when it is longer than `limit` characters
pub fn truncate_with_ellipsis(s: &str, limit: usize, keep: usize) -> String {
    if s.chars().count() > limit {
        format!("{}...", take_chars(s, keep))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_chars() {
        assert_eq!(take_chars("hello", 3), "hel");
        assert_eq!(take_chars("hi", 10), "hi");
        assert_eq!(take_chars("héllo wörld", 7), "héllo w");
        assert_eq!(take_chars("", 5), "");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10, 10), "short");
        assert_eq!(truncate_with_ellipsis(&"a".repeat(10), 10, 10), "a".repeat(10));
        assert_eq!(
            truncate_with_ellipsis(&"a".repeat(11), 10, 7),
            format!("{}...", "a".repeat(7))
        );
        assert_eq!(truncate_with_ellipsis("ééééé", 3, 2), "éé...");
    }
}
