// Header 脱敏

/// Authorization 值保留的最大明文字符数
pub const AUTH_VISIBLE_CHARS: usize = 30;

/// 脱敏单个 Header 值
/// 仅处理 authorization（键大小写不敏感），超长时截断为前 30 字符 + "..."，
/// 其余 Header 原样返回
pub fn redact_header_value(key: &str, value: &str) -> String {
    if !key.eq_ignore_ascii_case("authorization") {
        return value.to_string();
    }

    if value.chars().count() <= AUTH_VISIBLE_CHARS {
        return value.to_string();
    }

    let head: String = value.chars().take(AUTH_VISIBLE_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_authorization_untouched() {
        let value = "Bearer short";
        assert_eq!(redact_header_value("authorization", value), value);
    }

    #[test]
    fn test_exactly_30_chars_untouched() {
        let value = "a".repeat(30);
        assert_eq!(redact_header_value("authorization", &value), value);
    }

    #[test]
    fn test_31_chars_truncated() {
        let value = "a".repeat(31);
        let expected = format!("{}...", "a".repeat(30));
        assert_eq!(redact_header_value("authorization", &value), expected);
    }

    #[test]
    fn test_key_match_is_case_insensitive() {
        let value = "b".repeat(64);
        let expected = format!("{}...", "b".repeat(30));
        assert_eq!(redact_header_value("Authorization", &value), expected);
        assert_eq!(redact_header_value("AUTHORIZATION", &value), expected);
    }

    #[test]
    fn test_other_headers_untouched() {
        let value = "x".repeat(100);
        assert_eq!(redact_header_value("x-goog-api-key", &value), value);
        assert_eq!(redact_header_value("content-type", &value), value);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // 多字节字符按字符数截断，不能切在字节边界中间
        let value = "你".repeat(31);
        let expected = format!("{}...", "你".repeat(30));
        assert_eq!(redact_header_value("authorization", &value), expected);
    }
}
