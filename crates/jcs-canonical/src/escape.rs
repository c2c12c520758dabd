//! Minimal JSON string escaping

use std::fmt::Write as FmtWrite;

/// Append the double-quoted, minimally-escaped form of `s` to `output`.
///
/// Only `"`, `\`, and control characters below U+0020 are escaped. The
/// short escapes `\b \f \n \r \t` are used where JSON defines them and
/// `\u00xx` (lowercase hex) otherwise. Every other code point, printable
/// ASCII and all non-ASCII alike, passes through as raw UTF-8 with no
/// forward-slash escaping and no forced surrogate-pair escapes.
pub fn write_escaped(output: &mut Vec<u8>, s: &str) {
    output.push(b'"');

    for c in s.chars() {
        match c {
            '"' => output.extend_from_slice(b"\\\""),
            '\\' => output.extend_from_slice(b"\\\\"),
            '\u{0008}' => output.extend_from_slice(b"\\b"),
            '\u{000C}' => output.extend_from_slice(b"\\f"),
            '\n' => output.extend_from_slice(b"\\n"),
            '\r' => output.extend_from_slice(b"\\r"),
            '\t' => output.extend_from_slice(b"\\t"),
            c if (c as u32) < 0x20 => {
                let mut hex_buf = String::new();
                write!(hex_buf, "\\u{:04x}", c as u32).unwrap();
                output.extend_from_slice(hex_buf.as_bytes());
            }
            c => {
                let mut buf = [0u8; 4];
                output.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    output.push(b'"');
}

/// Escape `s` into an owned quoted string.
///
/// # Example
///
/// ```rust
/// use jcs_canonical::escape_string;
///
/// assert_eq!(escape_string("line1\nline2"), "\"line1\\nline2\"");
/// assert_eq!(escape_string("héllo"), "\"héllo\"");
/// ```
pub fn escape_string(s: &str) -> String {
    let mut output = Vec::with_capacity(s.len() + 2);
    write_escaped(&mut output, s);
    // Safe because we only produce valid UTF-8
    String::from_utf8(output).expect("escaped JSON is always valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_and_backslash() {
        assert_eq!(escape_string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(escape_string(r"C:\tmp"), r#""C:\\tmp""#);
    }

    #[test]
    fn test_short_escapes() {
        assert_eq!(escape_string("\u{0008}"), r#""\b""#);
        assert_eq!(escape_string("\u{000C}"), r#""\f""#);
        assert_eq!(escape_string("\n"), r#""\n""#);
        assert_eq!(escape_string("\r"), r#""\r""#);
        assert_eq!(escape_string("\t"), r#""\t""#);
    }

    #[test]
    fn test_other_control_characters_use_u00xx() {
        assert_eq!(escape_string("\u{0000}"), r#""\u0000""#);
        assert_eq!(escape_string("\u{0007}"), r#""\u0007""#);
        assert_eq!(escape_string("\u{001F}"), r#""\u001f""#);
    }

    #[test]
    fn test_printable_ascii_passes_through() {
        assert_eq!(escape_string("abc /<>&'"), "\"abc /<>&'\"");
        // DEL is above the control range JSON requires escaping for
        assert_eq!(escape_string("\u{007F}"), "\"\u{007F}\"");
    }

    #[test]
    fn test_non_ascii_passes_through_unescaped() {
        assert_eq!(escape_string("héllo 世界"), "\"héllo 世界\"");
        // Astral characters stay raw UTF-8, no surrogate-pair escapes
        assert_eq!(escape_string("\u{1F600}"), "\"\u{1F600}\"");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_string(""), r#""""#);
    }
}
