//! crates/logging/src/properties.rs
//! Lenient parser for `.properties`-style configuration text.

/// Parses properties-style text into ordered key/value pairs.
///
/// The accepted shape follows the configuration files the original platform
/// loaders consume:
///
/// - blank lines and lines starting with `#` or `!` are ignored;
/// - the first `=` or `:` separates key from value;
/// - keys and values are trimmed of surrounding whitespace;
/// - a line with no separator yields the whole line as a key with an empty
///   value (the downstream severity-label check rejects it with a
///   diagnostic, so nothing is silently lost).
///
/// Duplicate keys are preserved in order; the store applies last-write-wins.
#[must_use]
pub fn parse_properties(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = match line.find(['=', ':']) {
            Some(at) => (&line[..at], &line[at + 1..]),
            None => (line, ""),
        };
        pairs.push((key.trim().to_owned(), value.trim().to_owned()));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Vec<(String, String)> {
        parse_properties(text)
    }

    #[test]
    fn parses_key_value_lines() {
        let pairs = parsed("root = warn\ncom.example = debug\n");
        assert_eq!(
            pairs,
            vec![
                ("root".to_owned(), "warn".to_owned()),
                ("com.example".to_owned(), "debug".to_owned()),
            ]
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let pairs = parsed("# comment\n\n! also a comment\nroot=info\n");
        assert_eq!(pairs, vec![("root".to_owned(), "info".to_owned())]);
    }

    #[test]
    fn colon_is_an_alternate_separator() {
        let pairs = parsed("com.example: trace");
        assert_eq!(pairs, vec![("com.example".to_owned(), "trace".to_owned())]);
    }

    #[test]
    fn first_separator_wins() {
        let pairs = parsed("key = a=b");
        assert_eq!(pairs, vec![("key".to_owned(), "a=b".to_owned())]);
    }

    #[test]
    fn bare_key_yields_empty_value() {
        let pairs = parsed("justakey\n");
        assert_eq!(pairs, vec![("justakey".to_owned(), String::new())]);
    }

    #[test]
    fn duplicate_keys_are_preserved_in_order() {
        let pairs = parsed("a=trace\na=error\n");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].1, "error");
    }
}
