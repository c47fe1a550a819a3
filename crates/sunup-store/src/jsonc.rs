//! # JSON Input Tolerance
//!
//! Catalog files are hand-edited, so the loader tolerates `//` and
//! `/* */` comments and trailing commas. This module strips both before
//! the text reaches serde_json, which (correctly) accepts neither.
//!
//! Only input is preprocessed; everything this crate writes is strict
//! pretty-printed JSON.

/// Removes comments and trailing commas, leaving strict JSON.
///
/// String literals are left untouched, including ones containing `//`,
/// `/*`, or commas.
pub fn strip(text: &str) -> String {
    strip_trailing_commas(&strip_comments(text))
}

/// Drops `// line` and `/* block */` comments outside string literals.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    // Line comment: skip to end of line, keep the newline.
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}

/// Drops a comma whose next significant character closes an array or
/// object.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
            continue;
        }

        if c == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == ']' || chars[j] == '}') {
                i += 1; // drop the comma, keep the whitespace
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comments_removed() {
        let text = "{\n  // breakfast menu\n  \"a\": 1\n}";
        let clean = strip(text);
        let value: serde_json::Value = serde_json::from_str(&clean).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_block_comments_removed() {
        let text = r#"{ "a": /* inline note */ 1 }"#;
        let value: serde_json::Value = serde_json::from_str(&strip(text)).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_trailing_commas_removed() {
        let text = r#"{ "list": [1, 2, 3, ], "a": 1, }"#;
        let value: serde_json::Value = serde_json::from_str(&strip(text)).unwrap();
        assert_eq!(value["list"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_strings_are_untouched() {
        let text = r#"{ "note": "open 6:00 // daily", "path": "a/*b*/c," }"#;
        let value: serde_json::Value = serde_json::from_str(&strip(text)).unwrap();
        assert_eq!(value["note"], "open 6:00 // daily");
        assert_eq!(value["path"], "a/*b*/c,");
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let text = r#"{ "note": "say \"hi\", // not a comment" }"#;
        let value: serde_json::Value = serde_json::from_str(&strip(text)).unwrap();
        assert_eq!(value["note"], "say \"hi\", // not a comment");
    }

    #[test]
    fn test_strict_json_passes_through() {
        let text = r#"{"a": [1, 2], "b": {"c": "d"}}"#;
        assert_eq!(strip(text), text);
    }
}
