//! crates/logging/src/abbrev.rs
//! Deterministic abbreviation of over-long category names.

use std::borrow::Cow;

/// Maximum tag length accepted by the constrained platform channel.
///
/// Older platform releases reject log tags longer than 23 characters, so
/// that is the default limit the registry abbreviates against.
pub const MAX_TAG_LENGTH: usize = 23;

/// Shortens a category name to at most `max_len` characters.
///
/// Names already within the limit are returned borrowed and unchanged.
/// Otherwise the name is split on `.` (consecutive separators collapse, so
/// `aa..bb` has the tokens `aa` and `bb`) and rebuilt:
///
/// - a single-character token is kept as-is plus its separator, since it
///   cannot shrink further;
/// - every other non-final token contributes its first character followed by
///   a `*` marker and a separator;
/// - the final token is always kept whole, as it carries the most
///   identifying information.
///
/// If that still exceeds the limit (an over-long final token, or a name with
/// no tokens at all), the result is hard-truncated to `max_len - 1`
/// characters with a trailing `*`.
///
/// The function is total and deterministic, lengths are counted in chars,
/// and for any `max_len >= 1` the result is at most `max_len` characters.
/// Applying it twice with the same limit changes nothing: the first pass
/// already lands within the limit, so the second returns its input
/// unchanged.
///
/// # Examples
///
/// ```
/// use logging::abbreviate;
///
/// assert_eq!(abbreviate("short.Name", 23), "short.Name");
/// assert_eq!(
///     abbreviate("com.example.trace.sub.Client", 23),
///     "c*.e*.t*.s*.Client"
/// );
/// assert_eq!(abbreviate("a.b.LongClassName", 12), "a.b.LongCla*");
/// ```
#[must_use]
pub fn abbreviate(name: &str, max_len: usize) -> Cow<'_, str> {
    if name.chars().count() <= max_len {
        return Cow::Borrowed(name);
    }

    let mut shortened = String::with_capacity(name.len());
    let mut tokens = name.split('.').filter(|token| !token.is_empty()).peekable();
    if tokens.peek().is_none() {
        // No usable dot structure; fall through to the hard truncation below.
        shortened.push_str(name);
    } else {
        while let Some(token) = tokens.next() {
            if tokens.peek().is_none() {
                // Last token (usually a type name) is kept whole.
                shortened.push_str(token);
            } else if token.chars().count() == 1 {
                shortened.push_str(token);
                shortened.push('.');
            } else if let Some(first) = token.chars().next() {
                shortened.push(first);
                shortened.push_str("*.");
            }
        }
    }

    if shortened.chars().count() > max_len {
        let mut truncated: String = shortened
            .chars()
            .take(max_len.saturating_sub(1))
            .collect();
        truncated.push('*');
        return Cow::Owned(truncated);
    }
    Cow::Owned(shortened)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_returned_borrowed() {
        let name = "com.example.Client";
        let result = abbreviate(name, MAX_TAG_LENGTH);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, name);
    }

    #[test]
    fn names_at_the_limit_are_unchanged() {
        let name = "x".repeat(MAX_TAG_LENGTH);
        assert_eq!(abbreviate(&name, MAX_TAG_LENGTH), name.as_str());
    }

    #[test]
    fn intermediate_tokens_shrink_to_marker_form() {
        assert_eq!(
            abbreviate("com.example.trace.sub.packages", 23),
            "c*.e*.t*.s*.packages"
        );
    }

    #[test]
    fn single_char_tokens_survive_whole() {
        let result = abbreviate("a.b.LongClassNameExceedingLimit", 23);
        assert!(result.starts_with("a.b."));
        assert!(result.len() <= 23);
    }

    #[test]
    fn final_token_is_kept_whole_when_it_fits() {
        let result = abbreviate("org.example.deeply.nested.Handler", 23);
        assert!(result.ends_with("Handler"));
    }

    #[test]
    fn overlong_final_token_triggers_hard_truncation() {
        let result = abbreviate("a.AbsurdlyLongClassNameThatNeverEnds", 12);
        assert_eq!(result.chars().count(), 12);
        assert!(result.ends_with('*'));
        assert!(result.starts_with("a.Absurdly"));
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(
            abbreviate("aa..bb.ccc.LongEnoughToNeedWork", 16),
            "a*.b*.c*.LongEn*"
        );
    }

    #[test]
    fn all_separator_names_fall_back_to_truncation() {
        let name = ".".repeat(30);
        let result = abbreviate(&name, 23);
        assert_eq!(result.chars().count(), 23);
        assert!(result.ends_with('*'));
        assert!(result.starts_with("....."));
    }

    #[test]
    fn abbreviation_is_idempotent() {
        let once = abbreviate("com.example.net.transport.Client", 23).into_owned();
        let twice = abbreviate(&once, 23);
        assert_eq!(twice, once);
    }

    #[test]
    fn multibyte_names_truncate_on_char_boundaries() {
        let name = "ながいなまえ.ほかの.もっとながいなまえです";
        let result = abbreviate(name, 12);
        assert!(result.chars().count() <= 12);
    }
}
