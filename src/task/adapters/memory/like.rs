//! SQL `LIKE` pattern matching.

/// Returns `true` when `value` matches the SQL `LIKE` `pattern`.
///
/// `%` matches any run of characters (including none) and `_` matches
/// exactly one character. Matching is case-sensitive and runs in
/// `O(pattern × value)` time without recursion.
///
/// # Examples
///
/// ```
/// use task_filter::task::adapters::memory::like_matches;
///
/// assert!(like_matches("Review %", "Review invoice"));
/// assert!(like_matches("task_", "task1"));
/// assert!(!like_matches("task_", "task"));
/// ```
#[must_use]
pub fn like_matches(pattern: &str, value: &str) -> bool {
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let value_chars: Vec<char> = value.chars().collect();

    let mut pattern_pos = 0;
    let mut value_pos = 0;
    // Pattern index after the last `%` and the value index it is retried from.
    let mut last_wildcard: Option<(usize, usize)> = None;

    while let Some(actual) = value_chars.get(value_pos) {
        match pattern_chars.get(pattern_pos) {
            Some('%') => {
                pattern_pos += 1;
                last_wildcard = Some((pattern_pos, value_pos));
            }
            Some(expected) if *expected == '_' || expected == actual => {
                pattern_pos += 1;
                value_pos += 1;
            }
            _ => match last_wildcard {
                Some((resume, start)) => {
                    pattern_pos = resume;
                    value_pos = start + 1;
                    last_wildcard = Some((resume, value_pos));
                }
                None => return false,
            },
        }
    }

    pattern_chars
        .get(pattern_pos..)
        .is_some_and(|rest| rest.iter().all(|ch| *ch == '%'))
}
