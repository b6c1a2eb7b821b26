/// Finds a valid UTF-8 boundary within the given string, limited by a maximum
/// byte count.
///
/// Slicing the string at the returned index never splits a multi-byte
/// character. Used by the tools to truncate long previews without panicking.
///
/// # Example
/// ```
/// use mojimix::utils::find_max_utf8_length;
///
/// let input = "ひらがなテスト"; // 3 bytes per kana
/// let safe = find_max_utf8_length(input, 7);
/// let prefix = &input[..safe]; // No panic
/// assert_eq!(prefix, "ひら");
/// ```
pub fn find_max_utf8_length(sv: &str, max_byte_count: usize) -> usize {
    if sv.len() <= max_byte_count {
        return sv.len();
    }
    let mut end = max_byte_count;
    while !sv.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Formats a count with thousand separators for the tool summary lines.
///
/// # Example
/// ```
/// use mojimix::utils::format_thousand;
/// assert_eq!(format_thousand(1234567), "1,234,567");
/// ```
pub fn format_thousand(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
