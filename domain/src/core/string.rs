//! String utilities for the domain layer.

/// Keep at most `max_chars` characters of `s` (UTF-8 safe, no ellipsis).
///
/// Counts characters rather than bytes, so Japanese error text from the
/// model endpoint is cut at the same visible width as ASCII text.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("日本語テスト", 30), "日本語テスト");
        assert_eq!(truncate_chars("日本語テスト文字列", 4), "日本語テ");
    }

    #[test]
    fn test_truncate_exact_length() {
        let s = "a".repeat(50);
        assert_eq!(truncate_chars(&s, 50), s);
        let long = "b".repeat(80);
        assert_eq!(truncate_chars(&long, 50).chars().count(), 50);
    }
}
